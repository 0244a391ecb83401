use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ReferralError {
    #[error("Items per page must be positive, got {0}")]
    InvalidPageSize(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for ReferralError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ReferralError::Validation(errors.to_string())
    }
}
