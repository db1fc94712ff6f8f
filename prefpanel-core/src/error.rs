use crate::prefs::PrefKey;
use thiserror::Error;

/// Failures surfaced by the preference controller and its configuration.
#[derive(Debug, Error)]
pub enum A11yError {
    /// The persistent store rejected a read or write.
    #[error("preference store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("invalid value {value:?} for preference {key}")]
    InvalidPreference { key: PrefKey, value: String },
    #[error("unknown preference key {0:?}")]
    UnknownKey(String),
    /// The document root refused an attribute write.
    #[error("document error: {0}")]
    Document(String),
    #[error("config parsing error: {0}")]
    Config(#[from] serde_json::Error),
}
