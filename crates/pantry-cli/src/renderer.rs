//! Terminal rendering of markdown output.
//!
//! Rich mode styles markdown with termimad; plain mode prints it unchanged.

use std::{
    cell::Cell,
    io::{self, Write},
};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    // A rich status line was written without its trailing newline.
    status_open: Cell<bool>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            skin,
            status_open: Cell::new(false),
        }
    }

    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_to(&mut io::stdout().lock(), markdown)
    }

    /// Rewrite the current line in place, e.g. for a running timer.
    ///
    /// Plain mode has no cursor control and prints one line per update.
    pub fn render_status_line(&self, text: &str) -> Result<()> {
        self.render_status_line_to(&mut io::stdout().lock(), text)
    }

    /// Ends a line left open by [`Self::render_status_line`]. Does nothing
    /// when no status line is open.
    pub fn end_status_line(&self) -> Result<()> {
        self.end_status_line_to(&mut io::stdout().lock())
    }

    fn render_to(&self, out: &mut impl Write, markdown: &str) -> Result<()> {
        self.end_status_line_to(out)?;

        if self.rich_enabled {
            // Headers keep their hash marks; termimad would strip them inline.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[32m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }

        out.flush()?;
        Ok(())
    }

    fn render_status_line_to(&self, out: &mut impl Write, text: &str) -> Result<()> {
        if self.rich_enabled {
            write!(out, "\r\x1b[2K{}", self.skin.inline(text))?;
            self.status_open.set(true);
        } else {
            writeln!(out, "{text}")?;
        }

        out.flush()?;
        Ok(())
    }

    fn end_status_line_to(&self, out: &mut impl Write) -> Result<()> {
        if self.status_open.replace(false) {
            writeln!(out)?;
            out.flush()?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
