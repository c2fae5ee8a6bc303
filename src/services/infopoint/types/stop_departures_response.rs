#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct StopDeparturesResponseDeparture {
    /// Scheduled departure time, `/Date(...)/`.
    pub SDT: String,
    /// Estimated departure time, `/Date(...)/`.
    pub EDT: String,
}

#[derive(Deserialize, Serialize)]
pub struct StopDeparturesResponseRouteDirection {
    pub RouteId: u32,
    pub Direction: String,
    #[serde(default)]
    pub IsDone: bool,
    #[serde(default)]
    pub Departures: Vec<StopDeparturesResponseDeparture>,
}

#[derive(Deserialize, Serialize)]
pub struct StopDeparturesResponseStop {
    pub StopId: u32,
    #[serde(default)]
    pub RouteDirections: Vec<StopDeparturesResponseRouteDirection>,
}

pub type StopDeparturesResponse = Vec<StopDeparturesResponseStop>;
