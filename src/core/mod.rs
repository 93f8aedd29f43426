pub mod greeter;

pub use crate::domain::model::{Greeting, DESCRIPTION_LINE};
pub use crate::utils::error::Result;
