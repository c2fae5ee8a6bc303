use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    config::stops::find_stop, types::stop_response::StopResponseStop, utils::app_error::AppError,
};

#[derive(Serialize, Deserialize)]
pub struct GetStopResponse {
    pub data: StopResponseStop,
}

pub async fn get_stop(Path(stop_id): Path<u32>) -> Result<Response, AppError> {
    let stop = find_stop(stop_id).ok_or_else(|| AppError::not_found("Stop not found"))?;

    Ok((
        StatusCode::OK,
        Json(GetStopResponse {
            data: StopResponseStop::from(stop),
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
    use tower::ServiceExt;

    use crate::{app::gen_mock_app, types::stop_record::Direction, utils::app_error::AppErrorResponse};

    use super::*;

    #[tokio::test]
    async fn get_response() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/stops/1431")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetStopResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.description, "20th & 1st S Outbound");
        assert_eq!(body.data.direction, Direction::Outbound);
        assert_eq!(
            body.data.hit_line,
            [[33.511321, -86.804249], [33.511733, -86.803235]]
        );
    }

    #[tokio::test]
    async fn unknown_stop() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/stops/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: AppErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.message, "Stop not found");
    }
}
