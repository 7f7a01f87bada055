use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn paint(self, text: &str, bold: bool) -> String {
        let styled = match self {
            SemanticColor::Success => text.with(theme::colors::SUCCESS),
            SemanticColor::Error => text.with(theme::colors::ERROR),
            SemanticColor::Warning => text.with(theme::colors::WARNING),
            SemanticColor::Info => text.with(theme::colors::INFO),
            SemanticColor::Dim => text.with(theme::colors::DIM),
        };
        if bold {
            format!("{}", styled.bold())
        } else {
            format!("{styled}")
        }
    }
}

/// A piece of text with an optional semantic color, rendered lazily so plain
/// output stays byte-identical to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    fn styled(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::styled(text, Some(SemanticColor::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(text, Some(SemanticColor::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::styled(text, Some(SemanticColor::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::styled(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::styled(text, Some(SemanticColor::Dim))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        match self.color {
            Some(color) => color.paint(&self.text, self.bold),
            None if self.bold => format!("{}", self.text.as_str().bold()),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
