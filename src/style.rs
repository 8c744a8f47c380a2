//! Frame styling configuration

use crate::{Error, Result};

/// Largest margin a [`FrameStyle`] accepts.
pub const MAX_MARGIN: usize = u16::MAX as usize;

/// Margin and border character used when framing a picture
///
/// The defaults match the classic look: one blank cell of margin on every
/// side and a `*` border.
///
/// The fields are public for pattern matching and literals; styles built that
/// way skip validation, so a margin above [`MAX_MARGIN`] or a control
/// character is the caller's responsibility.
///
/// # Examples
///
/// ```
/// let style = charpic::FrameStyle::default();
/// assert_eq!(style.margin, 1);
/// assert_eq!(style.frame_char, '*');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    /// Blank cells between the border and the framed content, on all four sides
    pub margin: usize,
    /// Character the border is drawn with
    pub frame_char: char,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            margin: 1,
            frame_char: '*',
        }
    }
}

impl FrameStyle {
    /// Build a style from possibly untrusted values.
    ///
    /// Margins must lie in `0..=MAX_MARGIN` and the frame character must be
    /// printable; anything else would produce a picture whose rows disagree
    /// with its declared width.
    pub fn new(margin: i64, frame_char: char) -> Result<Self> {
        let margin = usize::try_from(margin)
            .map_err(|_| invalid_margin(margin))
            .and_then(check_margin)?;
        check_frame_char(frame_char)?;
        Ok(Self { margin, frame_char })
    }

    pub fn with_margin(self, margin: usize) -> Result<Self> {
        let margin = check_margin(margin)?;
        Ok(Self { margin, ..self })
    }

    pub fn with_frame_char(self, frame_char: char) -> Result<Self> {
        check_frame_char(frame_char)?;
        Ok(Self { frame_char, ..self })
    }
}

fn invalid_margin(margin: impl std::fmt::Display) -> Error {
    Error::InvalidArgument(format!(
        "margin must be between 0 and {}, got {}",
        MAX_MARGIN, margin
    ))
}

fn check_margin(margin: usize) -> Result<usize> {
    if margin > MAX_MARGIN {
        return Err(invalid_margin(margin));
    }
    Ok(margin)
}

fn check_frame_char(c: char) -> Result<()> {
    if c.is_control() {
        return Err(Error::InvalidArgument(format!(
            "frame character must be printable, got {:?}",
            c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style() {
        let s = FrameStyle::default();
        assert_eq!(
            s,
            FrameStyle {
                margin: 1,
                frame_char: '*',
            }
        );
    }

    #[test]
    fn new_rejects_negative_margin() {
        let err = FrameStyle::new(-1, '*').unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn new_rejects_oversized_margin() {
        assert!(matches!(
            FrameStyle::new(i64::MAX, '*'),
            Err(Error::InvalidArgument(_))
        ));
        assert!(FrameStyle::new(MAX_MARGIN as i64 + 1, '*').is_err());
        assert_eq!(FrameStyle::new(MAX_MARGIN as i64, '*').unwrap().margin, MAX_MARGIN);
    }

    #[test]
    fn with_margin_rejects_oversized_margin() {
        let s = FrameStyle::default();
        assert!(matches!(
            s.with_margin(usize::MAX / 4),
            Err(Error::InvalidArgument(_))
        ));
        assert!(s.with_margin(MAX_MARGIN + 1).is_err());
        assert_eq!(s.with_margin(MAX_MARGIN).unwrap().margin, MAX_MARGIN);
    }

    #[test]
    fn new_rejects_control_chars() {
        assert!(FrameStyle::new(1, '\n').is_err());
        assert!(FrameStyle::default().with_frame_char('\t').is_err());
    }

    #[test]
    fn builders_replace_single_fields() {
        let s = FrameStyle::new(0, '#').unwrap().with_margin(3).unwrap();
        assert_eq!(s.margin, 3);
        assert_eq!(s.frame_char, '#');
        let s = s.with_frame_char('+').unwrap();
        assert_eq!(s.frame_char, '+');
        assert_eq!(s.margin, 3);
    }
}
