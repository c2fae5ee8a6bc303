use crate::services::infopoint::infopoint_service::InfoPointService;

#[derive(Clone)]
pub struct AppState {
    pub infopoint_service: InfoPointService,
    pub auth_key: Option<String>,
}
