//! Picture handle and the combinators that build new pictures from old ones
//!
//! A [`Picture`] is a cheap, cloneable handle onto an immutable tree. The
//! combinators never copy or mutate their inputs: the new picture simply
//! points at the same subtrees, so one picture can appear any number of times
//! in other compositions (including on both sides of the same one).

mod concat;
mod frame;
mod node;
mod text;

use std::fmt;
use std::io;
use std::sync::Arc;

use log::{debug, trace};

use crate::{FrameStyle, Result};
use concat::{HConcatNode, VConcatNode};
use frame::FrameNode;
use node::Node;
use text::TextNode;

/// A rectangular block of characters.
///
/// # Examples
///
/// ```
/// use charpic::{frame, Picture};
///
/// let p = frame(&Picture::new(["x"]));
/// assert_eq!(p.to_string(), "*****\n*   *\n* x *\n*   *\n*****\n");
/// ```
#[derive(Debug, Clone)]
pub struct Picture {
    root: Arc<Node>,
}

impl Picture {
    /// Build a picture from its lines, top to bottom. Lines may be empty or
    /// of different lengths; an empty sequence yields a 0x0 picture.
    ///
    /// Each `char` takes one column, so lines are expected to be single-line
    /// printable text. A `\n` or `\t` inside a line is copied through as-is
    /// and the rendered row will not line up with `width()`.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self::from_node(Node::Text(TextNode::new(lines)))
    }

    /// Build a picture from a block of text, one row per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// The 0x0 picture.
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            root: Arc::new(node),
        }
    }

    pub fn width(&self) -> usize {
        self.root.width()
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Render a single row. With `pad` the result is exactly `width()`
    /// characters long; rows outside `0..height()` come back blank.
    pub fn render_row(&self, row: usize, pad: bool) -> String {
        let mut s = String::new();
        self.root
            .render_row(&mut s, row, pad)
            .expect("writing to a String cannot fail");
        s
    }

    /// All rows as they appear in the final output, without trailing padding.
    pub fn rows(&self) -> Vec<String> {
        (0..self.height())
            .map(|row| self.render_row(row, false))
            .collect()
    }

    /// Write the picture to `out`, one `\n`-terminated line per row.
    ///
    /// Errors from the sink are returned unchanged as [`crate::Error::Io`].
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        debug!("writing {}x{} picture", width, height);

        let mut line = String::new();
        for row in 0..height {
            line.clear();
            self.root.render_row(&mut line, row, false)?;
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Whether two handles point at the very same tree.
    pub fn ptr_eq(a: &Picture, b: &Picture) -> bool {
        Arc::ptr_eq(&a.root, &b.root)
    }
}

impl Default for Picture {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<String>> for Picture {
    fn from(lines: Vec<String>) -> Self {
        Self::from_node(Node::Text(TextNode::new(lines)))
    }
}

impl From<&[&str]> for Picture {
    fn from(lines: &[&str]) -> Self {
        Self::new(lines.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Picture {
    fn from(lines: [&str; N]) -> Self {
        Self::new(lines)
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for row in 0..self.height() {
            self.root.render_row(f, row, false)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Surround `picture` with the default frame: one cell of margin and a `*` border.
pub fn frame(picture: &Picture) -> Picture {
    frame_with(picture, FrameStyle::default())
}

/// Surround `picture` with a border drawn in `style`.
pub fn frame_with(picture: &Picture, style: FrameStyle) -> Picture {
    trace!(
        "frame: margin={} char={:?} around {}x{}",
        style.margin,
        style.frame_char,
        picture.width(),
        picture.height()
    );
    Picture::from_node(Node::Frame(FrameNode::new(picture.root.clone(), style)))
}

/// Place `left` and `right` side by side, tops aligned.
pub fn hcat(left: &Picture, right: &Picture) -> Picture {
    trace!("hcat: {}x{} | {}x{}", left.width(), left.height(), right.width(), right.height());
    Picture::from_node(Node::HConcat(HConcatNode::new(
        left.root.clone(),
        right.root.clone(),
    )))
}

/// Stack `top` above `bottom`, left edges aligned.
pub fn vcat(top: &Picture, bottom: &Picture) -> Picture {
    trace!("vcat: {}x{} / {}x{}", top.width(), top.height(), bottom.width(), bottom.height());
    Picture::from_node(Node::VConcat(VConcatNode::new(
        top.root.clone(),
        bottom.root.clone(),
    )))
}
