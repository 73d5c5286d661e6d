use thiserror::Error;

use crate::fields::FieldId;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Missing value for {0}")]
    MissingValue(FieldId),

    #[error("Unknown {field} value: {value}")]
    UnknownChoice { field: FieldId, value: String },
}
