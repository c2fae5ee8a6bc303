pub mod infopoint_service_error;
pub mod stop_departures_response;
