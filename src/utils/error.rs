use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid value for '{field}': {reason} (got {value:?})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GreeterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreeterError::IoError(_) => ErrorCategory::Output,
            GreeterError::ConfigParseError(_)
            | GreeterError::PatternError(_)
            | GreeterError::ConfigReadError { .. }
            | GreeterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 下游管道關閉 (例如 `greeter | head -1`) 不算失敗
            GreeterError::IoError(e) if e.kind() == io::ErrorKind::BrokenPipe => ErrorSeverity::Low,
            GreeterError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::IoError(_) => "Could not write the greeting to standard output".to_string(),
            GreeterError::ConfigParseError(e) => format!("The config file is not valid TOML: {}", e.message()),
            GreeterError::PatternError(e) => format!("Internal pattern error: {}", e),
            GreeterError::ConfigReadError { path, .. } => format!("Could not read config file '{}'", path),
            GreeterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::IoError(_) => "Check that standard output is open and writable",
            GreeterError::ConfigParseError(_) => {
                "Fix the TOML syntax; the file only accepts a [greeter] table with a `name` key"
            }
            GreeterError::PatternError(_) => "Report this as a bug",
            GreeterError::ConfigReadError { .. } => "Check the --config path and its permissions",
            GreeterError::InvalidConfigValueError { .. } => "Correct the value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
