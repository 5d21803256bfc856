use thiserror::Error;

#[derive(Error, Debug)]
pub enum TouchError {
    #[error("Missing required identifier: {field}")]
    MissingIdentifierError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to decode revision response (HTTP {status}): {source}")]
    DecodeError {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode service definition: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Configuration,
    Transport,
    Decode,
    Encode,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TouchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TouchError::MissingIdentifierError { .. } => ErrorCategory::Precondition,
            TouchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TouchError::TransportError(_) => ErrorCategory::Transport,
            TouchError::DecodeError { .. } => ErrorCategory::Decode,
            TouchError::EncodeError(_) => ErrorCategory::Encode,
            TouchError::OutputError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Transport => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TouchError::MissingIdentifierError { field } => {
                format!("The {} is required before talking to Koyeb", field)
            }
            TouchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            TouchError::TransportError(e) => format!("Could not reach the Koyeb API: {}", e),
            TouchError::DecodeError { status, source } => format!(
                "Koyeb answered with HTTP {} but the revision could not be read: {}",
                status, source
            ),
            TouchError::EncodeError(e) => {
                format!("The service definition could not be re-encoded: {}", e)
            }
            TouchError::OutputError(e) => format!("Could not write to stdout: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Precondition => {
                "Run `koyeb-touch <API_TOKEN> <APP> <SERVICE>` with non-empty identifiers"
            }
            ErrorCategory::Configuration => "Check the command-line options and try again",
            ErrorCategory::Transport => "Check your network connection and the API URL",
            ErrorCategory::Decode => {
                "Check the API token, app and service names; the API may have returned an error"
            }
            ErrorCategory::Encode => "Inspect the service definition in the Koyeb dashboard",
            ErrorCategory::Output => "Check where standard output is redirected",
        }
    }
}

pub type Result<T> = std::result::Result<T, TouchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_surfaces_parse_error() {
        let source = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
        let err = TouchError::DecodeError {
            status: 502,
            source,
        };

        assert_eq!(err.category(), ErrorCategory::Decode);
        assert_eq!(err.severity().exit_code(), 1);
        let message = err.to_string();
        assert!(message.contains("HTTP 502"));
        assert!(message.contains("EOF"));
    }

    #[test]
    fn test_every_fatal_error_exits_nonzero() {
        let errors = vec![
            TouchError::MissingIdentifierError {
                field: "app".to_string(),
            },
            TouchError::InvalidConfigValueError {
                field: "api_url".to_string(),
                value: "ftp://x".to_string(),
                reason: "Unsupported URL scheme: ftp".to_string(),
            },
            TouchError::EncodeError(serde_json::from_str::<u8>("x").unwrap_err()),
            TouchError::OutputError(std::io::Error::from(std::io::ErrorKind::BrokenPipe)),
        ];

        for err in errors {
            assert_ne!(err.severity().exit_code(), 0, "{}", err);
            assert!(!err.recovery_suggestion().is_empty());
        }
    }
}
