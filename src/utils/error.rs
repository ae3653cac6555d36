use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    InvalidRequest(String),
}

impl AppError {
    /// Stable machine-readable code attached to error response bodies
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::InvalidRequest(_) => "invalid_request",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::DatabaseError("down".into()).code(), "database_error");
        assert_eq!(AppError::InvalidRequest("bad".into()).code(), "invalid_request");
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::InvalidRequest("email is required".into());
        assert_eq!(err.to_string(), "Invalid request: email is required");
    }
}
