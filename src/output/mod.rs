//! Text sink for command results
//!
//! The sink carries a small amount of formatting state (fill, width,
//! precision, notation) that applies to numbers written through it.
//! Code that changes that state for one result takes a [`FormatGuard`]
//! so later output sees the sink exactly as it was.

pub mod guard;

pub use guard::FormatGuard;

use std::io::{self, Write};

/// Diagnostic line written for unknown commands and undefined statistics
pub const INVALID_COMMAND: &str = "<INVALID COMMAND>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Shortest representation that round-trips
    #[default]
    General,
    /// Always exactly `precision` digits after the decimal point
    Fixed,
}

/// Formatting state applied to numbers written through a [`Sink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub fill: char,
    pub width: usize,
    pub precision: usize,
    pub notation: Notation,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            fill: ' ',
            width: 0,
            precision: 6,
            notation: Notation::General,
        }
    }
}

impl NumberFormat {
    fn render_real(&self, value: f64) -> String {
        let text = match self.notation {
            Notation::General => value.to_string(),
            Notation::Fixed => format!("{:.*}", self.precision, value),
        };
        self.pad(text)
    }

    fn render_count(&self, value: usize) -> String {
        self.pad(value.to_string())
    }

    fn pad(&self, text: String) -> String {
        let len = text.chars().count();
        if len >= self.width {
            return text;
        }
        let mut padded: String = std::iter::repeat_n(self.fill, self.width - len).collect();
        padded.push_str(&text);
        padded
    }
}

/// Line-oriented writer with number formatting state
#[derive(Debug)]
pub struct Sink<W: Write> {
    inner: W,
    format: NumberFormat,
}

impl<W: Write> Sink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            format: NumberFormat::default(),
        }
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }

    pub fn set_format(&mut self, format: NumberFormat) {
        self.format = format;
    }

    /// Switch to fixed-point notation with `precision` decimals
    pub fn set_fixed(&mut self, precision: usize) {
        self.format.notation = Notation::Fixed;
        self.format.precision = precision;
    }

    pub fn set_fill(&mut self, fill: char) {
        self.format.fill = fill;
    }

    pub fn set_width(&mut self, width: usize) {
        self.format.width = width;
    }

    /// Snapshot the formatting state; it is restored when the guard drops
    pub fn guard(&mut self) -> FormatGuard<'_, W> {
        FormatGuard::new(self)
    }

    pub fn write_real(&mut self, value: f64) -> io::Result<()> {
        let text = self.format.render_real(value);
        self.inner.write_all(text.as_bytes())
    }

    pub fn write_count(&mut self, value: usize) -> io::Result<()> {
        let text = self.format.render_count(value);
        self.inner.write_all(text.as_bytes())
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")
    }

    /// Write `text` verbatim followed by a newline
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())?;
        self.newline()
    }

    pub fn write_invalid(&mut self) -> io::Result<()> {
        self.write_line(INVALID_COMMAND)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
