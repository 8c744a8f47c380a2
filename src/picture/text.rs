/// Leaf node holding literal lines of text

use std::fmt::{self, Write};

use super::node::pad_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextNode {
    lines: Vec<String>,
}

impl TextNode {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Length of the longest line, 0 when there are no lines.
    pub(crate) fn width(&self) -> usize {
        self.lines.iter().map(|l| char_len(l)).max().unwrap_or(0)
    }

    pub(crate) fn height(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn render_row<W: Write + ?Sized>(
        &self,
        out: &mut W,
        row: usize,
        pad: bool,
    ) -> fmt::Result {
        let mut last_char = 0;
        if let Some(line) = self.lines.get(row) {
            out.write_str(line)?;
            last_char = char_len(line);
        }

        if pad {
            pad_line(out, last_char, self.width())?;
        }
        Ok(())
    }
}

/// Display width of a line: one column per `char`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
