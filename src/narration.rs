use anyhow::Result;
use crossterm::{
    style::{Print, PrintStyledContent, Stylize},
    ExecutableCommand,
};
use std::{fmt::Display, io::Write};

/// Styled terminal output for the demo scenarios.
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn heading(&mut self, title: &str) -> Result<()> {
        self.out
            .execute(Print("\n"))?
            .execute(PrintStyledContent(title.bold().underlined()))?
            .execute(Print("\n"))?;
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        self.out.execute(Print(format!("{text}\n")))?;
        Ok(())
    }

    /// An outcome the scenario was looking for, e.g. a caught overflow.
    pub fn expected(&mut self, text: impl Display) -> Result<()> {
        self.out
            .execute(PrintStyledContent(text.to_string().green()))?
            .execute(Print("\n"))?;
        Ok(())
    }

    pub fn unexpected(&mut self, text: impl Display) -> Result<()> {
        self.out
            .execute(PrintStyledContent(text.to_string().red().bold()))?
            .execute(Print("\n"))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
