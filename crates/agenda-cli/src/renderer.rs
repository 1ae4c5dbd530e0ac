//! Terminal output for Markdown produced by `agenda_core::display`.
//!
//! Styled output goes through termimad, which also lays out the budget
//! table. Plain mode prints the Markdown source unchanged so it can be piped
//! or compared in tests.

use std::io::{self, IsTerminal};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    styled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Styled output is used only when `color` is requested and stdout is a
    /// terminal.
    pub fn new(color: bool) -> Self {
        Self::with_styling(color && io::stdout().is_terminal())
    }

    fn with_styling(styled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkCyan);
        skin.bold.set_fg(Color::Yellow);
        skin.table.set_fg(Color::Grey);
        Self { styled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.styled {
            print!("{}", self.skin.term_text(markdown));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}
