use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_departures;
mod get_stop;
mod get_stop_departures;
mod get_stops;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/stops", get(get_stops::get_stops))
        .route("/stops/:id", get(get_stop::get_stop))
        .route(
            "/stops/:id/departures",
            get(get_stop_departures::get_stop_departures),
        )
        .route("/departures", get(get_departures::get_departures))
}
