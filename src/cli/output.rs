//! Colored terminal output.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Writes user-facing messages, colored when attached to a terminal.
///
/// Errors always print; everything else is suppressed in quiet mode.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Green message on stdout.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), Some(Color::Green), true, message)
    }

    /// Yellow message on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stderr(), Some(Color::Yellow), false, message)
    }

    /// Red message on stderr.
    pub fn error(&self, message: &str) -> io::Result<()> {
        Self::write_line(Self::stderr(), Some(Color::Red), true, message)
    }

    /// Plain message on stdout.
    pub fn info(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), None, false, message)
    }

    /// Bold section header on stdout.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), None, true, title)
    }

    /// Indented line on stdout.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), None, false, &format!("  {message}"))
    }

    fn stdout() -> StandardStream {
        StandardStream::stdout(Self::color_choice(io::stdout().is_terminal()))
    }

    fn stderr() -> StandardStream {
        StandardStream::stderr(Self::color_choice(io::stderr().is_terminal()))
    }

    fn color_choice(is_terminal: bool) -> ColorChoice {
        if is_terminal {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }

    fn write_line(
        mut stream: impl WriteColor,
        color: Option<Color>,
        bold: bool,
        message: &str,
    ) -> io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
        write!(stream, "{message}")?;
        stream.reset()?;
        writeln!(stream)
    }
}
