pub mod app_state;
pub mod stop_record;
pub mod stop_response;
