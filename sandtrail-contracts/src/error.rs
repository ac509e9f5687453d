use thiserror::Error;

/// Failures reported by an external collaborator.
///
/// None of these are fatal; callers degrade to a narrower view state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend rejected request: {0}")]
    Rejected(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;
