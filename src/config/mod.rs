pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

pub const DEFAULT_NAME: &str = "World";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting and a short Japanese description")]
pub struct CliConfig {
    #[arg(long, help = "Name to greet [default: World]")]
    pub name: Option<String>,

    #[arg(long, help = "TOML file with a [greeter] table")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// `--name`, then `greeter.name` from the config file, then `World`.
    pub fn resolve_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        if let Some(path) = &self.config {
            if let Some(name) = TomlConfig::from_file(path)?.name() {
                return Ok(name.to_string());
            }
        }

        Ok(DEFAULT_NAME.to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
