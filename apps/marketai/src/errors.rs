use thiserror::Error;

/// Application-level error type for the CLI surface.
/// The scoring engine itself has no error type: it cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lead JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation(_) | AppError::Json(_) => 2,
            AppError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_exits_with_2() {
        assert_eq!(AppError::Validation("missing".to_string()).exit_code(), 2);
    }

    #[test]
    fn test_bad_json_exits_with_2() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Invalid lead JSON"));
    }

    #[test]
    fn test_io_exits_with_1() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.exit_code(), 1);
    }
}
