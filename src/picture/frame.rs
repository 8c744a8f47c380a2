/// Border drawn around a child picture, with a blank margin in between

use std::fmt::{self, Write};
use std::sync::Arc;

use super::node::{pad_line, Node};
use crate::FrameStyle;

#[derive(Debug)]
pub(crate) struct FrameNode {
    child: Arc<Node>,
    margin: usize,
    frame_char: char,
}

impl FrameNode {
    pub(crate) fn new(child: Arc<Node>, style: FrameStyle) -> Self {
        Self {
            child,
            margin: style.margin,
            frame_char: style.frame_char,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.border_span().saturating_add(self.child.width())
    }

    pub(crate) fn height(&self) -> usize {
        self.border_span().saturating_add(self.child.height())
    }

    /// Cells added on each axis: two borders plus margin on both sides.
    /// Saturates instead of overflowing for styles built without validation.
    fn border_span(&self) -> usize {
        self.margin.saturating_mul(2).saturating_add(2)
    }

    /// Rows fall in three bands: the border itself, the blank margin just
    /// inside it, and the child's content. Every in-range row is written at
    /// full width regardless of `pad`.
    pub(crate) fn render_row<W: Write + ?Sized>(
        &self,
        out: &mut W,
        row: usize,
        pad: bool,
    ) -> fmt::Result {
        let width = self.width();
        let height = self.height();

        if row >= height {
            if pad {
                pad_line(out, 0, width)?;
            }
            return Ok(());
        }

        let space_region = self.margin.saturating_add(1);
        if row == 0 || row == height - 1 {
            for _ in 0..width {
                out.write_char(self.frame_char)?;
            }
        } else if row < space_region || row >= height - space_region {
            out.write_char(self.frame_char)?;
            pad_line(out, 1, width - 1)?;
            out.write_char(self.frame_char)?;
        } else {
            out.write_char(self.frame_char)?;
            pad_line(out, 0, self.margin)?;
            // interior columns must line up with the child's full width
            self.child.render_row(out, row - space_region, true)?;
            pad_line(out, 0, self.margin)?;
            out.write_char(self.frame_char)?;
        }
        Ok(())
    }
}
