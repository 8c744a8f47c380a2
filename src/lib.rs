//! charpic: composable character pictures
//!
//! Build rectangular blocks of text from lines, then combine them by framing,
//! placing side by side, or stacking. Pictures are immutable and share their
//! parts, so any picture can be reused in as many compositions as needed.
//!
//! # Example
//!
//! ```
//! use charpic::{frame, hcat, vcat, Picture};
//!
//! let left = Picture::new(["ab"]);
//! let right = Picture::new(["c", "d"]);
//!
//! assert_eq!(hcat(&left, &right).rows(), vec!["abc", "  d"]);
//! assert_eq!(vcat(&left, &right).rows(), vec!["ab", "c", "d"]);
//!
//! let boxed = frame(&Picture::new(["x"]));
//! print!("{}", boxed);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod picture;
pub use picture::{frame, frame_with, hcat, vcat, Picture};

pub mod style;
pub use style::FrameStyle;

// JSON descriptions of picture trees
pub mod scene;
pub use scene::Scene;

pub mod demo;
