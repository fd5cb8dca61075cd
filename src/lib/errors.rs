use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Serialization(String),
}

impl AppError {
    /// Text shown to the user when a submission fails. Config and HTTP bodies
    /// are already user-facing; transport errors keep their category prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message) | AppError::Http { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_category() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (401): Invalid credentials");
        assert_eq!(
            AppError::Timeout("Request timed out.".to_string()).to_string(),
            "Timeout: Request timed out."
        );
    }

    #[test]
    fn user_message_strips_prefix_for_server_and_config_errors() {
        let err = AppError::Http {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.user_message(), "Email already registered");
        assert_eq!(
            AppError::Network("offline".to_string()).user_message(),
            "Network error: offline"
        );
    }
}
