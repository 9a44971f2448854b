use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("null indirection to {type_name}")]
    NullIndirection { type_name: &'static str },
    #[error("non-record value of type {type_name}")]
    NonRecord { type_name: &'static str },
    #[error("non-string field '{field}' ({type_name})")]
    NonStringField {
        field: &'static str,
        type_name: &'static str,
    },
    #[error("empty field '{field}' has no default value")]
    MissingDefault { field: &'static str },
}

pub type RecordResult<T> = Result<T, RecordError>;
