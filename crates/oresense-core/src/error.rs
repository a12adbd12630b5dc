use thiserror::Error;

use crate::model::Field;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidFieldValue {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
