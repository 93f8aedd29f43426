pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::greeter::{compose, greet, greet_to, Greeter};
pub use domain::model::{Greeting, DESCRIPTION_LINE};
pub use utils::error::{GreeterError, Result};
