use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("{}", validation_message(.field, .reason))]
    Validation { field: String, reason: String },

    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reason used for absent or blank required fields.
pub const MISSING: &str = "missing";

fn validation_message(field: &str, reason: &str) -> String {
    // Batch loads append a record position to the reason.
    match reason.strip_prefix(MISSING) {
        Some(rest) => format!("Missing field: {}{}", field, rest),
        None => format!("Invalid {}: {}", field, reason),
    }
}

impl MenuError {
    pub fn missing(field: &str) -> Self {
        MenuError::Validation {
            field: field.to_string(),
            reason: MISSING.to_string(),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MenuError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            MenuError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = MenuError::missing("sellingPrice");
        assert_eq!(err.to_string(), "Missing field: sellingPrice");
        assert_eq!(err.field(), Some("sellingPrice"));
    }

    #[test]
    fn test_invalid_field_message() {
        let err = MenuError::invalid("prepTime", "must be a whole number");
        assert_eq!(err.to_string(), "Invalid prepTime: must be a whole number");
    }

    #[test]
    fn test_arithmetic_has_no_field() {
        let err = MenuError::Arithmetic("prep time is zero".to_string());
        assert!(err.field().is_none());
    }
}
