use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::{
    config::stops::find_stop,
    services::infopoint::infopoint_service::StopDeparture,
    types::{app_state::AppState, stop_response::StopResponseStop},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};

#[derive(Validate, Deserialize)]
pub struct GetStopDeparturesPayload {
    #[validate(range(min = 1, max = 20, message = "Must be between 1 and 20"))]
    pub limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GetStopDeparturesResponseDeparture {
    pub route_id: u32,
    pub direction: String,
    pub scheduled_departure_time: String,
    pub expected_departure_time: String,
    pub minutes_until_departure: i64,
}

impl From<StopDeparture> for GetStopDeparturesResponseDeparture {
    fn from(d: StopDeparture) -> Self {
        GetStopDeparturesResponseDeparture {
            route_id: d.route_id,
            direction: d.direction,
            scheduled_departure_time: d.scheduled_departure_time,
            expected_departure_time: d.expected_departure_time,
            minutes_until_departure: d.minutes_until_departure,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct GetStopDeparturesResponseData {
    pub stop: StopResponseStop,
    pub departures: Vec<GetStopDeparturesResponseDeparture>,
}

#[derive(Serialize, Deserialize)]
pub struct GetStopDeparturesResponse {
    pub data: GetStopDeparturesResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_stop_departures(
    State(state): State<AppState>,
    Path(stop_id): Path<u32>,
    ValidatedQuery(payload): ValidatedQuery<GetStopDeparturesPayload>,
) -> Result<Response, AppError> {
    let stop = find_stop(stop_id).ok_or_else(|| AppError::not_found("Stop not found"))?;

    let departures = state
        .infopoint_service
        .get_stop_departures(stop.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch departures for stop {}: {}", stop.id, e);
            AppError::internal()
        })?
        .into_iter()
        .take(payload.limit.map(|l| l as usize).unwrap_or(usize::MAX))
        .map(GetStopDeparturesResponseDeparture::from)
        .collect::<Vec<GetStopDeparturesResponseDeparture>>();

    Ok((
        StatusCode::OK,
        Json(GetStopDeparturesResponse {
            data: GetStopDeparturesResponseData {
                stop: StopResponseStop::from(stop),
                departures,
            },
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use crate::{
        app::gen_mock_app,
        services::infopoint::types::stop_departures_response::{
            StopDeparturesResponseDeparture as InfoPointDeparture,
            StopDeparturesResponseRouteDirection, StopDeparturesResponseStop,
        },
    };

    use super::*;

    fn infopoint_body(stop_id: u32, minutes: &[i64]) -> String {
        let now = Utc::now();

        let body = vec![StopDeparturesResponseStop {
            StopId: stop_id,
            RouteDirections: vec![StopDeparturesResponseRouteDirection {
                RouteId: 12,
                Direction: "Inbound".to_string(),
                IsDone: false,
                Departures: minutes
                    .iter()
                    .map(|m| {
                        let at = (now + Duration::minutes(*m)).timestamp_millis();
                        InfoPointDeparture {
                            SDT: format!("/Date({}-0500)/", at),
                            EDT: format!("/Date({}-0500)/", at),
                        }
                    })
                    .collect(),
            }],
        }];

        serde_json::to_string(&body).unwrap()
    }

    #[tokio::test]
    async fn get_response() {
        let mut mock_app = gen_mock_app().await;

        let mock = mock_app
            .infopoint_server
            .mock("GET", "/rest/StopDepartures/Get/2492")
            .with_header("content-type", "application/json")
            .with_body(infopoint_body(2492, &[9, 3, 20]))
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/stops/2492/departures?limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetStopDeparturesResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.stop.id, 2492);
        assert_eq!(body.data.departures.len(), 2);
        assert!(body.data.departures[0].minutes_until_departure < 4);
        assert!(body.data.departures[1].minutes_until_departure >= 8);
        assert_eq!(body.data.departures[0].route_id, 12);
    }

    #[tokio::test]
    async fn unknown_stop_skips_upstream() {
        let mut mock_app = gen_mock_app().await;

        let mock = mock_app
            .infopoint_server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/stops/42/departures")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejects_bad_limit() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/stops/2492/departures?limit=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[traced_test]
    async fn upstream_failure() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .infopoint_server
            .mock("GET", "/rest/StopDepartures/Get/2113")
            .with_status(500)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/stops/2113/departures")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs_contain("Failed to fetch departures for stop 2113"));
    }
}
