use crate::core::{Greeting, Result};
use std::io::{self, Write};

/// Writes greetings to a sink, one call at a time.
pub struct Greeter<W: Write> {
    out: W,
}

impl<W: Write> Greeter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn greet(&mut self, name: &str) -> Result<()> {
        let greeting = compose(name);
        tracing::debug!("Greeting {:?}", name);

        for line in greeting.lines() {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn compose(name: &str) -> Greeting {
    Greeting::for_name(name)
}

/// Greets `name` on standard output.
pub fn greet(name: &str) -> Result<()> {
    Greeter::new(io::stdout().lock()).greet(name)
}

/// Same as [`greet`], against any writer.
pub fn greet_to<W: Write>(name: &str, out: W) -> Result<()> {
    Greeter::new(out).greet(name)
}
