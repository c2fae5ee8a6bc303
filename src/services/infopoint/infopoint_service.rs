use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::types::{
    infopoint_service_error::InfoPointServiceError,
    stop_departures_response::StopDeparturesResponse,
};

#[derive(Clone)]
pub struct InfoPointServiceConfig {
    pub host: String,
}

#[derive(Clone)]
pub struct InfoPointService {
    config: InfoPointServiceConfig,
    client: reqwest::Client,
}

#[derive(Debug, PartialEq)]
pub struct StopDeparture {
    pub route_id: u32,
    pub direction: String,
    pub scheduled_departure_time: String,
    pub expected_departure_time: String,
    pub minutes_until_departure: i64,
}

impl InfoPointService {
    pub fn new(config: InfoPointServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_stop_departures(
        &self,
        stop_id: u32,
    ) -> Result<Vec<StopDeparture>, InfoPointServiceError> {
        let url = format!(
            "{}/rest/StopDepartures/Get/{}",
            self.config.host.trim_end_matches('/'),
            stop_id
        );
        debug!("Fetching departures from {}", url);

        let resp = self.client.get(&url).send().await.map_err(|e| {
            InfoPointServiceError::Internal(format!("Failed to send request: {}", e))
        })?;

        if !resp.status().is_success() {
            return Err(InfoPointServiceError::Upstream(resp.status().as_u16()));
        }

        let body = resp.json::<StopDeparturesResponse>().await.map_err(|e| {
            InfoPointServiceError::Internal(format!("Failed to get response body: {}", e))
        })?;

        Ok(collect_departures(stop_id, body, Utc::now()))
    }
}

/// Flattens the route directions of `stop_id` into departures ordered by
/// expected time. Finished route directions are dropped.
pub fn collect_departures(
    stop_id: u32,
    body: StopDeparturesResponse,
    now: DateTime<Utc>,
) -> Vec<StopDeparture> {
    let mut departures = body
        .into_iter()
        .filter(|s| s.StopId == stop_id)
        .flat_map(|s| s.RouteDirections)
        .filter(|rd| !rd.IsDone)
        .flat_map(|rd| {
            let route_id = rd.RouteId;
            let direction = rd.Direction;

            rd.Departures.into_iter().filter_map(move |d| {
                let (Some(scheduled), Some(expected)) =
                    (parse_infopoint_date(&d.SDT), parse_infopoint_date(&d.EDT))
                else {
                    warn!(
                        "Skipping departure on route {} with unreadable times {} / {}",
                        route_id, d.SDT, d.EDT
                    );
                    return None;
                };

                Some((route_id, direction.clone(), scheduled, expected))
            })
        })
        .collect::<Vec<_>>();

    departures.sort_by_key(|(_, _, _, expected)| *expected);

    departures
        .into_iter()
        .map(|(route_id, direction, scheduled, expected)| StopDeparture {
            route_id,
            direction,
            scheduled_departure_time: scheduled.to_rfc3339(),
            expected_departure_time: expected.to_rfc3339(),
            minutes_until_departure: expected.signed_duration_since(now).num_minutes(),
        })
        .collect()
}

/// Parses the `/Date(1700000000000-0500)/` form InfoPoint uses for times.
/// The offset suffix only describes the agency's zone, the millis are UTC.
pub fn parse_infopoint_date(value: &str) -> Option<DateTime<Utc>> {
    let inner = value.strip_prefix("/Date(")?.strip_suffix(")/")?;

    let millis_end = inner
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(inner.len());
    if millis_end == 0 {
        return None;
    }

    let offset = &inner[millis_end..];
    let valid_offset = offset.is_empty()
        || (offset.len() == 5
            && offset.starts_with(['+', '-'])
            && offset[1..].chars().all(|c| c.is_ascii_digit()));
    if !valid_offset {
        return None;
    }

    let millis = inner[..millis_end].parse::<i64>().ok()?;

    DateTime::from_timestamp_millis(millis)
}
