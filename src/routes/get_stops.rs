use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    config::stops::{stops_in_direction, STOPS, URL},
    types::{stop_record::Direction, stop_response::StopResponseStop},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};

#[derive(Validate, Deserialize)]
pub struct GetStopsPayload {
    pub direction: Option<Direction>,
}

#[derive(Serialize, Deserialize)]
pub struct GetStopsResponseData {
    pub endpoint: String,
    pub stops: Vec<StopResponseStop>,
}

#[derive(Serialize, Deserialize)]
pub struct GetStopsResponse {
    pub data: GetStopsResponseData,
}

pub async fn get_stops(
    ValidatedQuery(payload): ValidatedQuery<GetStopsPayload>,
) -> Result<Response, AppError> {
    let stops = match payload.direction {
        Some(direction) => stops_in_direction(direction)
            .map(StopResponseStop::from)
            .collect(),
        None => STOPS.iter().map(StopResponseStop::from).collect(),
    };

    Ok((
        StatusCode::OK,
        Json(GetStopsResponse {
            data: GetStopsResponseData {
                endpoint: URL.to_string(),
                stops,
            },
        }),
    )
        .into_response())
}
