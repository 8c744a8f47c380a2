//! The picture tree and its per-variant dispatch

use std::fmt::{self, Write};

use super::concat::{HConcatNode, VConcatNode};
use super::frame::FrameNode;
use super::text::TextNode;

/// One immutable node of a picture tree.
///
/// Every variant answers the same three questions: how wide it is, how tall
/// it is, and what a given row looks like. Rows at or past `height()` render
/// as blank content rather than failing; concatenation relies on it when its
/// children differ in size.
#[derive(Debug)]
pub(crate) enum Node {
    Text(TextNode),
    Frame(FrameNode),
    HConcat(HConcatNode),
    VConcat(VConcatNode),
}

impl Node {
    pub(crate) fn width(&self) -> usize {
        match self {
            Node::Text(n) => n.width(),
            Node::Frame(n) => n.width(),
            Node::HConcat(n) => n.width(),
            Node::VConcat(n) => n.width(),
        }
    }

    pub(crate) fn height(&self) -> usize {
        match self {
            Node::Text(n) => n.height(),
            Node::Frame(n) => n.height(),
            Node::HConcat(n) => n.height(),
            Node::VConcat(n) => n.height(),
        }
    }

    /// Write row `row` into `out`.
    ///
    /// With `pad` set the output is exactly `width()` characters; otherwise
    /// trailing blanks may be left off.
    pub(crate) fn render_row<W: Write + ?Sized>(
        &self,
        out: &mut W,
        row: usize,
        pad: bool,
    ) -> fmt::Result {
        match self {
            Node::Text(n) => n.render_row(out, row, pad),
            Node::Frame(n) => n.render_row(out, row, pad),
            Node::HConcat(n) => n.render_row(out, row, pad),
            Node::VConcat(n) => n.render_row(out, row, pad),
        }
    }
}

/// Write spaces for columns `start..end`. Nothing is written when `start >= end`.
pub(crate) fn pad_line<W: Write + ?Sized>(out: &mut W, start: usize, end: usize) -> fmt::Result {
    for _ in start..end {
        out.write_char(' ')?;
    }
    Ok(())
}
