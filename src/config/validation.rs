use std::collections::HashSet;

use thiserror::Error;
use validator::Validate;

use crate::types::stop_record::StopRecord;

#[derive(Debug, Error, PartialEq)]
pub enum StopTableError {
    #[error("stop ids must be positive")]
    NonPositiveId,
    #[error("stop id {0} is listed more than once")]
    DuplicateId(u32),
    #[error("stop {id} has an invalid hit line: {message}")]
    InvalidHitLine { id: u32, message: String },
    #[error("service endpoint {0:?} is not an https url")]
    InvalidEndpoint(String),
}

pub fn validate_stop_table(stops: &[StopRecord]) -> Result<(), StopTableError> {
    let mut seen_ids = HashSet::<u32>::new();

    for stop in stops {
        if stop.id == 0 {
            return Err(StopTableError::NonPositiveId);
        }

        if !seen_ids.insert(stop.id) {
            return Err(StopTableError::DuplicateId(stop.id));
        }

        for point in [stop.hit_line.start(), stop.hit_line.end()] {
            if !point.latitude.is_finite() || !point.longitude.is_finite() {
                return Err(StopTableError::InvalidHitLine {
                    id: stop.id,
                    message: "coordinates must be finite".to_string(),
                });
            }

            point
                .validate()
                .map_err(|e| StopTableError::InvalidHitLine {
                    id: stop.id,
                    message: e.to_string(),
                })?;
        }
    }

    Ok(())
}

pub fn validate_endpoint(endpoint: &str) -> Result<reqwest::Url, StopTableError> {
    match reqwest::Url::parse(endpoint) {
        Ok(url) if url.scheme() == "https" && url.has_host() => Ok(url),
        _ => Err(StopTableError::InvalidEndpoint(endpoint.to_string())),
    }
}
