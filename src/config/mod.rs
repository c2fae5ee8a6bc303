pub mod app_config;
pub mod stops;
pub mod validation;

pub use stops::{STOPS, URL};
