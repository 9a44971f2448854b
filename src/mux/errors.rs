use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MuxError {
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern { pattern: String },
    #[error("multiple registrations for '{pattern}'")]
    MultipleRegistrations { pattern: String },
}

pub type MuxResult<T> = Result<T, MuxError>;
