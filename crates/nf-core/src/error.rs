use thiserror::Error;

pub type NfResult<T> = Result<T, NfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Value for {what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },
}
