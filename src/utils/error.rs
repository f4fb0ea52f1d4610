use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to install {signal} handler: {source}")]
    SignalInstallError {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProbeError {
    /// Short message suitable for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::IoError(e) => format!("Could not write output: {}", e),
            ProbeError::SignalInstallError { signal, .. } => {
                format!("Could not listen for {}", signal)
            }
            ProbeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProbeError::IoError(_) => "Check that stdout is still open (e.g. the reading end of a pipe)",
            ProbeError::SignalInstallError { .. } => {
                "Make sure the process is allowed to register signal handlers"
            }
            ProbeError::InvalidConfigValueError { .. } => {
                "Use a grace period of at most 24h and a keep-alive interval of at most 1h, both non-zero"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::IoError(_) => 1,
            ProbeError::InvalidConfigValueError { .. } => 2,
            ProbeError::SignalInstallError { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let io = ProbeError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(io.exit_code(), 1);

        let config = ProbeError::InvalidConfigValueError {
            field: "grace_period".to_string(),
            value: "0ns".to_string(),
            reason: "Duration must be greater than zero".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let install = ProbeError::SignalInstallError {
            signal: "SIGTERM",
            source: std::io::Error::other("denied"),
        };
        assert_eq!(install.exit_code(), 3);
        assert_eq!(
            install.to_string(),
            "Failed to install SIGTERM handler: denied"
        );
        assert_eq!(install.user_friendly_message(), "Could not listen for SIGTERM");
    }
}
