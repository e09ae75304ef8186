use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexError {
    /// No rule matches at byte offset `position`.
    NoMatch { position: usize },
}

impl LexError {
    pub fn no_match(position: usize) -> LexError {
        LexError::NoMatch { position }
    }

    pub fn position(&self) -> usize {
        match self {
            LexError::NoMatch { position } => *position,
        }
    }

    /// Formats the error the way the monitor prints it: the message, the line
    /// holding the failing position and a caret under it. Tabs before the
    /// position are kept in the padding so the caret lines up.
    pub fn render(&self, source: &str) -> String {
        let mut position = self.position().min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }

        let line_start = source[..position].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[position..]
            .find('\n')
            .map_or(source.len(), |i| position + i);
        let line = source[line_start..line_end].trim_end_matches('\r');

        let pad: String = source[line_start..position]
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        format!("{}\n{}\n{}^", self, line, pad)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::NoMatch { position } => write!(f, "no match at position {}", position),
        }
    }
}

impl std::error::Error for LexError {}
