// Minspeed Config - Errors
// Failures raised while building processors from declarations

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Processor '{name}': min_value must not be negative (got {value})")]
    NegativeMinValue { name: String, value: i32 },

    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    #[error("Unknown event code: {0}")]
    UnknownCode(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_min_value_message() {
        let err = ConfigError::NegativeMinValue {
            name: "scroll".to_string(),
            value: -4,
        };
        assert_eq!(
            err.to_string(),
            "Processor 'scroll': min_value must not be negative (got -4)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConfigError = io.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
