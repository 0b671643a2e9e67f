use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlintError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GlintError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("division by zero: {0}")]
    ZeroDivision(String),

    #[error("index out of range: index={index} size={size}")]
    IndexOutOfRange { index: isize, size: usize },
}
