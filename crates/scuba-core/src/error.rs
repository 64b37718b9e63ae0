use thiserror::Error;

pub type DiveResult<T> = Result<T, DiveError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiveError {
    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl DiveError {
    /// True when the error comes from bad caller input rather than a missing formula.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, DiveError::NotImplemented { .. })
    }
}
