//! Error types for the aggregation engine

use thiserror::Error;

/// Errors the engine itself can raise.
///
/// Anchor-format validation is the only failure mode of the core; everything
/// else it computes is total. Collaborator failures (persistence, access
/// control) never reach this type.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl EngineError {
    /// Stable machine-readable code for the surrounding service layer.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_code_and_message() {
        let err = EngineError::Validation("date must be in YYYY-MM format for period=month".into());
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(
            err.to_string(),
            "Validation error: date must be in YYYY-MM format for period=month"
        );
    }
}
