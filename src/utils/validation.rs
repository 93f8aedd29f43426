use crate::utils::error::{GreeterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Config file path cannot be empty; omit --config to use the defaults".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Config file path contains a NUL byte".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "greeter.toml").is_ok());
        assert!(validate_path("config", "設定/greeter.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_empty_path_points_at_config_flag() {
        let err = validate_path("config", "").unwrap_err();
        assert!(err.user_friendly_message().contains("--config"));
    }
}
