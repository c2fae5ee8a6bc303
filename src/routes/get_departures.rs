use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    config::stops::STOPS,
    types::{app_state::AppState, stop_response::StopResponseStop},
    utils::app_error::AppError,
};

use super::get_stop_departures::GetStopDeparturesResponseDeparture;

#[derive(Serialize, Deserialize)]
pub struct GetDeparturesResponseStop {
    pub stop: StopResponseStop,
    pub next_departure: Option<GetStopDeparturesResponseDeparture>,
}

#[derive(Serialize, Deserialize)]
pub struct GetDeparturesResponseData {
    pub stops: Vec<GetDeparturesResponseStop>,
}

#[derive(Serialize, Deserialize)]
pub struct GetDeparturesResponse {
    pub data: GetDeparturesResponseData,
}

/// Next departure of every configured stop, fetched concurrently.
pub async fn get_departures(State(state): State<AppState>) -> Result<Response, AppError> {
    let results = join_all(
        STOPS
            .iter()
            .map(|stop| state.infopoint_service.get_stop_departures(stop.id)),
    )
    .await;

    let mut stops = Vec::<GetDeparturesResponseStop>::with_capacity(STOPS.len());

    for (stop, result) in STOPS.iter().zip(results) {
        let departures = result.map_err(|e| {
            error!("Failed to fetch departures for stop {}: {}", stop.id, e);
            AppError::internal()
        })?;

        stops.push(GetDeparturesResponseStop {
            stop: StopResponseStop::from(stop),
            next_departure: departures
                .into_iter()
                .next()
                .map(GetStopDeparturesResponseDeparture::from),
        });
    }

    Ok((
        StatusCode::OK,
        Json(GetDeparturesResponse {
            data: GetDeparturesResponseData { stops },
        }),
    )
        .into_response())
}
