#[derive(Debug)]
pub enum InfoPointServiceError {
    Internal(String),
    Upstream(u16),
}

impl std::fmt::Display for InfoPointServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InfoPointServiceError::Internal(e) => write!(f, "Internal error: {}", e),
            InfoPointServiceError::Upstream(status) => {
                write!(f, "InfoPoint responded with status {}", status)
            }
        }
    }
}
