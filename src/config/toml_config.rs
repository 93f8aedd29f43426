use crate::utils::error::{GreeterError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;

const ENV_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub greeter: GreeterSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreeterSection {
    pub name: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| GreeterError::ConfigReadError {
                path: path.display().to_string(),
                source,
            })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;

        // 先解析再替換, 環境變數的值不經過 TOML 轉義
        if let Some(name) = config.greeter.name.take() {
            config.greeter.name = Some(Self::substitute_env_vars(&name)?);
        }

        Ok(config)
    }

    /// 替換環境變數 (例如 ${USER}); 未設定的變數保持原樣
    fn substitute_env_vars(value: &str) -> Result<String> {
        let re = Regex::new(ENV_VAR_PATTERN)?;

        let result = re.replace_all(value, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn name(&self) -> Option<&str> {
        self.greeter.name.as_deref()
    }
}
