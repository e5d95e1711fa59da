//! ANSI styling for dump output.

use std::fmt;

/// Escape codes for each role in a dump; empty strings when disabled.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    section: &'static str,
    offset: &'static str,
    word: &'static str,
    reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        section: "\x1b[34m",
        offset: "\x1b[32m",
        word: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        section: "",
        offset: "",
        word: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// `[name]` section header, in blue.
    pub fn section(&self, name: impl fmt::Display) -> Painted<String> {
        self.paint(self.section, format!("[{name}]"))
    }

    /// Decoded offset, in green.
    pub fn offset<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(self.offset, text)
    }

    /// Raw word, dimmed.
    pub fn word<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(self.word, text)
    }

    fn paint<T: fmt::Display>(&self, code: &'static str, text: T) -> Painted<T> {
        Painted {
            code,
            reset: self.reset,
            text,
        }
    }
}

/// Text wrapped in an escape code and a reset.
pub struct Painted<T> {
    code: &'static str,
    reset: &'static str,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.code, self.text, self.reset)
    }
}
