use std::fmt;

/// 固定的說明行 (日文, UTF-8)
pub const DESCRIPTION_LINE: &str = "Pythonのサンプルコードです。";

/// The two lines produced for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub headline: String,
    pub description: &'static str,
}

impl Greeting {
    pub fn for_name(name: &str) -> Self {
        Self {
            headline: format!("Hello, {}!", name),
            description: DESCRIPTION_LINE,
        }
    }

    pub fn lines(&self) -> [&str; 2] {
        [&self.headline, self.description]
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", self.description)
    }
}
