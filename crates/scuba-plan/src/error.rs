//! Error types for plan files.

use thiserror::Error;

/// Errors from loading or saving a list of pending calculations.
///
/// Failures of individual calculations stay as [`scuba_core::DiveError`]
/// inside each entry's result; only whole-plan problems end up here.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Plan file parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid plan: {what}")]
    Invalid { what: &'static str },
}

pub type PlanResult<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::Invalid {
            what: "duplicate label",
        };
        assert!(err.to_string().contains("duplicate label"));
    }

    #[test]
    fn yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<i32>>("[1, two]").unwrap_err();
        let plan_err: PlanError = yaml_err.into();
        assert!(matches!(plan_err, PlanError::Parse(_)));
        assert!(plan_err.to_string().starts_with("Plan file parse error"));
    }
}
