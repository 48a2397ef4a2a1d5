use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid arguments for {command}: {reason}")]
    InvalidArguments { command: String, reason: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{}", upstream_status_message(*status, message.as_deref()))]
    UpstreamStatus {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to create repository: {message}")]
    CreationFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn upstream_status_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => {
            format!("Request failed with status code {}: {}", status, message)
        }
        _ => format!("Request failed with status code {}", status),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller sent something the gateway cannot dispatch.
    Client,
    /// The upstream API failed or could not be reached.
    Upstream,
    Configuration,
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::UnknownCommand
            | GatewayError::InvalidArguments { .. }
            | GatewayError::InvalidBody { .. } => ErrorCategory::Client,
            GatewayError::ApiError(_)
            | GatewayError::UpstreamStatus { .. }
            | GatewayError::CreationFailed { .. } => ErrorCategory::Upstream,
            GatewayError::IoError(_)
            | GatewayError::ConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// HTTP status code the error maps to when it reaches the query endpoint.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Client => 400,
            _ => 500,
        }
    }

    pub fn invalid_arguments(command: &str, reason: impl Into<String>) -> Self {
        GatewayError::InvalidArguments {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message_is_literal() {
        assert_eq!(GatewayError::UnknownCommand.to_string(), "Unknown command");
        assert_eq!(GatewayError::UnknownCommand.status_code(), 400);
    }

    #[test]
    fn test_upstream_status_message() {
        let err = GatewayError::UpstreamStatus {
            status: 404,
            message: Some("Not Found".to_string()),
        };
        assert_eq!(err.to_string(), "Request failed with status code 404: Not Found");
        assert_eq!(err.status_code(), 500);

        let bare = GatewayError::UpstreamStatus {
            status: 502,
            message: None,
        };
        assert_eq!(bare.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            GatewayError::invalid_arguments("list_repos", "missing field `username`").category(),
            ErrorCategory::Client
        );
        assert_eq!(
            GatewayError::CreationFailed {
                message: "name already exists on this account".to_string()
            }
            .category(),
            ErrorCategory::Upstream
        );
        assert_eq!(
            GatewayError::ConfigError {
                message: "bad".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
    }
}
