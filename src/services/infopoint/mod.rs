pub mod infopoint_service;
pub mod types;
