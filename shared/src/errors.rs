use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Telegram API error: {0}")]
    Telegram(String),

    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Update has no sender")]
    MissingSender,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Short stable label, used as a metric tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Config(_) => "config",
            ServiceError::Telegram(_) => "telegram",
            ServiceError::Session(_) => "session",
            ServiceError::Scene(_) => "scene",
            ServiceError::MissingSender => "missing_sender",
            ServiceError::Internal(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
