/// Side-by-side and stacked composition of two pictures

use std::fmt::{self, Write};
use std::sync::Arc;

use super::node::{pad_line, Node};

/// `left` and `right` placed next to each other, tops aligned.
#[derive(Debug)]
pub(crate) struct HConcatNode {
    left: Arc<Node>,
    right: Arc<Node>,
}

impl HConcatNode {
    pub(crate) fn new(left: Arc<Node>, right: Arc<Node>) -> Self {
        Self { left, right }
    }

    pub(crate) fn width(&self) -> usize {
        self.left.width().saturating_add(self.right.width())
    }

    pub(crate) fn height(&self) -> usize {
        self.left.height().max(self.right.height())
    }

    pub(crate) fn render_row<W: Write + ?Sized>(
        &self,
        out: &mut W,
        row: usize,
        pad: bool,
    ) -> fmt::Result {
        // The right side starts at left.width(), so the left side must be
        // padded whenever the right side has something on this row.
        self.left.render_row(out, row, pad || row < self.right.height())?;
        self.right.render_row(out, row, pad)
    }
}

/// `top` stacked above `bottom`, left edges aligned.
#[derive(Debug)]
pub(crate) struct VConcatNode {
    top: Arc<Node>,
    bottom: Arc<Node>,
}

impl VConcatNode {
    pub(crate) fn new(top: Arc<Node>, bottom: Arc<Node>) -> Self {
        Self { top, bottom }
    }

    pub(crate) fn width(&self) -> usize {
        self.top.width().max(self.bottom.width())
    }

    pub(crate) fn height(&self) -> usize {
        self.top.height().saturating_add(self.bottom.height())
    }

    pub(crate) fn render_row<W: Write + ?Sized>(
        &self,
        out: &mut W,
        row: usize,
        pad: bool,
    ) -> fmt::Result {
        let top_height = self.top.height();
        let mut last_char = 0;

        if row < top_height {
            self.top.render_row(out, row, pad)?;
            last_char = self.top.width();
        } else if row < self.height() {
            self.bottom.render_row(out, row - top_height, pad)?;
            last_char = self.bottom.width();
        }

        if pad {
            pad_line(out, last_char, self.width())?;
        }
        Ok(())
    }
}
