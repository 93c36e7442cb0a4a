use crossterm::style::{style, Color, Stylize};
use std::fmt;
use std::io::Write;

/// Fixed tag vocabulary of the status stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    Ok,
    Warn,
    Skip,
    Err,
    Del,
    Dry,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Info => "[INFO]",
            Tag::Ok => "[OK]",
            Tag::Warn => "[WARN]",
            Tag::Skip => "[SKIP]",
            Tag::Err => "[ERR]",
            Tag::Del => "[DEL]",
            Tag::Dry => "[DRY]",
        }
    }

    fn color(&self) -> Color {
        match self {
            Tag::Info => Color::Blue,
            Tag::Ok => Color::Green,
            Tag::Warn => Color::Yellow,
            Tag::Skip => Color::DarkGrey,
            Tag::Err => Color::Red,
            Tag::Del => Color::Magenta,
            Tag::Dry => Color::Cyan,
        }
    }

    fn to_stderr(&self) -> bool {
        matches!(self, Tag::Warn | Tag::Err)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for user-facing status lines.
pub trait StatusSink {
    fn emit(&mut self, tag: Tag, message: &str);
    /// Untagged line, used for the summary block.
    fn line(&mut self, text: &str);
}

pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            color: atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn format(&self, tag: Tag, message: &str) -> String {
        if self.color {
            format!("{} {}", style(tag.as_str()).with(tag.color()).bold(), message)
        } else {
            format!("{} {}", tag.as_str(), message)
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for ConsoleSink {
    fn emit(&mut self, tag: Tag, message: &str) {
        let rendered = self.format(tag, message);
        if tag.to_stderr() {
            eprintln!("{}", rendered);
        } else {
            println!("{}", rendered);
            let _ = std::io::stdout().flush();
        }
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}
