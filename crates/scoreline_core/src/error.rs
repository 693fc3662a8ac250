use thiserror::Error;

/// Failure to turn backend data into a [`Store`](crate::store::Store).
///
/// These are shape errors produced upstream (a reducer or the API sent the
/// wrong type for a slice). They are reported, never repaired.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed '{domain}' slice: {reason}")]
    MalformedShape { domain: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
