use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed roster data: {message}")]
    CodecError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Department already exists: {name}")]
    DuplicateDepartment { name: String },

    #[error("Department not found: {name}")]
    DepartmentNotFound { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn codec(message: impl Into<String>) -> Self {
        RosterError::CodecError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RosterError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::ValidationError { .. } | RosterError::DuplicateDepartment { .. } => {
                ErrorCategory::Input
            }
            RosterError::DepartmentNotFound { .. } => ErrorCategory::Lookup,
            RosterError::CodecError { .. } | RosterError::SerializationError(_) => {
                ErrorCategory::Data
            }
            RosterError::ConfigError { .. } => ErrorCategory::Configuration,
            RosterError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Input and lookup failures only abort the current command. Anything
    /// touching the persisted file means memory and disk can no longer be
    /// trusted to agree, so the session has to stop.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::ValidationError { field, .. } => {
                format!("Invalid detail entered: {} cannot be empty", field)
            }
            RosterError::DuplicateDepartment { name } => {
                format!("Department '{}' already exists", name)
            }
            RosterError::DepartmentNotFound { name } => {
                format!("Department '{}' doesn't exist", name)
            }
            RosterError::CodecError { .. } | RosterError::SerializationError(_) => {
                "The saved roster file is damaged and could not be read".to_string()
            }
            RosterError::ConfigError { message } => format!("Configuration problem: {}", message),
            RosterError::IoError(e) => format!("Could not access the roster file: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::ValidationError { .. } => "Enter a non-empty value and try again",
            RosterError::DuplicateDepartment { .. } => "Pick a different department name",
            RosterError::DepartmentNotFound { .. } => {
                "List the departments first and use one of the names shown"
            }
            RosterError::CodecError { .. } | RosterError::SerializationError(_) => {
                "Fix or move the data file aside; an absent file starts an empty roster"
            }
            RosterError::ConfigError { .. } => "Check the settings file and command line flags",
            RosterError::IoError(_) => "Check the data file path and its permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_recoverable() {
        let err = RosterError::DepartmentNotFound {
            name: "Sales".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("Sales"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = RosterError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_codec_helper() {
        let err = RosterError::codec("missing field `ID`");
        assert!(matches!(err, RosterError::CodecError { .. }));
        assert_eq!(err.to_string(), "Malformed roster data: missing field `ID`");
    }
}
