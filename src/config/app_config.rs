use std::env;

use validator::Validate;

use super::stops::URL;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, Validate)]
pub struct AppConfig {
    #[validate(url(message = "INFOPOINT_HOST must be a url"))]
    pub infopoint_host: String,
    pub auth_key: Option<String>,
    pub bind_address: String,
}

impl AppConfig {
    /// Reads `INFOPOINT_HOST`, `AUTH_KEY` and `BIND_ADDRESS`.
    pub fn from_env() -> Result<Self, validator::ValidationErrors> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, validator::ValidationErrors> {
        let config = AppConfig {
            infopoint_host: lookup("INFOPOINT_HOST")
                .unwrap_or_else(|| URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            auth_key: lookup("AUTH_KEY").filter(|k| !k.is_empty()),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        };

        config.validate()?;

        Ok(config)
    }
}
