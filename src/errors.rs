use crate::link::LinkError;
use crate::mux::MuxError;
use crate::record::RecordError;
use crate::reverse::{OptionsError, ReverseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Mux(#[from] MuxError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Reverse(#[from] ReverseError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
