//! Declarative picture descriptions
//!
//! A scene is a JSON document mirroring the combinator tree:
//!
//! ```json
//! {"frame": {"picture": {"hcat": [{"text": ["left"]}, {"text": ["right"]}]},
//!            "margin": 2, "frame_char": "#"}}
//! ```
//!
//! `margin` and `frame_char` may be omitted and fall back to the defaults of
//! [`FrameStyle`].

use log::debug;
use serde::Deserialize;

use crate::picture::{frame_with, hcat, vcat, Picture};
use crate::{Error, FrameStyle, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Text(Vec<String>),
    Frame(Box<FrameScene>),
    Hcat(Box<Scene>, Box<Scene>),
    Vcat(Box<Scene>, Box<Scene>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrameScene {
    pub picture: Scene,
    #[serde(default = "default_margin")]
    pub margin: i64,
    #[serde(default = "default_frame_char")]
    pub frame_char: char,
}

fn default_margin() -> i64 {
    FrameStyle::default().margin as i64
}

fn default_frame_char() -> char {
    FrameStyle::default().frame_char
}

impl Scene {
    pub fn from_json(src: &str) -> Result<Scene> {
        Ok(serde_json::from_str(src)?)
    }

    /// Turn the description into a picture, validating text lines and frame
    /// styles on the way.
    pub fn build(&self) -> Result<Picture> {
        match self {
            Scene::Text(lines) => {
                if let Some(bad) = lines.iter().find(|l| l.chars().any(char::is_control)) {
                    return Err(Error::InvalidArgument(format!(
                        "text lines must be printable, got {:?}",
                        bad
                    )));
                }
                Ok(Picture::from(lines.clone()))
            }
            Scene::Frame(f) => {
                let style = FrameStyle::new(f.margin, f.frame_char)?;
                let inner = f.picture.build()?;
                debug!(
                    "scene: framing {}x{} with {:?}",
                    inner.width(),
                    inner.height(),
                    style
                );
                Ok(frame_with(&inner, style))
            }
            Scene::Hcat(left, right) => Ok(hcat(&left.build()?, &right.build()?)),
            Scene::Vcat(top, bottom) => Ok(vcat(&top.build()?, &bottom.build()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_scene() {
        let src = r#"{"hcat": [{"text": ["ab"]}, {"vcat": [{"text": ["c"]}, {"text": ["d"]}]}]}"#;
        let s = Scene::from_json(src).unwrap();
        let p = s.build().unwrap();
        assert_eq!(p.rows(), vec!["abc", "  d"]);
    }

    #[test]
    fn frame_defaults_apply() {
        let s = Scene::from_json(r#"{"frame": {"picture": {"text": ["x"]}}}"#).unwrap();
        match &s {
            Scene::Frame(f) => {
                assert_eq!(f.margin, 1);
                assert_eq!(f.frame_char, '*');
            }
            other => panic!("unexpected scene: {:?}", other),
        }
        assert_eq!(s.build().unwrap().width(), 5);
    }

    #[test]
    fn custom_frame_style() {
        let src = r##"{"frame": {"picture": {"text": ["x"]}, "margin": 0, "frame_char": "#"}}"##;
        let s = Scene::from_json(src).unwrap();
        assert_eq!(s.build().unwrap().rows(), vec!["###", "#x#", "###"]);
    }

    #[test]
    fn negative_margin_is_rejected_at_build() {
        let src = r#"{"frame": {"picture": {"text": ["x"]}, "margin": -2}}"#;
        let s = Scene::from_json(src).unwrap();
        assert!(matches!(s.build(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn oversized_margin_is_rejected_at_build() {
        let s = Scene::from_json(
            r#"{"frame": {"picture": {"text": ["x"]}, "margin": 9223372036854775807}}"#,
        )
        .unwrap();
        assert!(matches!(s.build(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn control_characters_in_text_are_rejected() {
        for src in [r#"{"text": ["a\nb"]}"#, r#"{"text": ["ok", "tab\there"]}"#] {
            let s = Scene::from_json(src).unwrap();
            assert!(matches!(s.build(), Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn malformed_json_is_a_scene_error() {
        assert!(matches!(Scene::from_json("{\"text\": 3}"), Err(Error::Scene(_))));
        assert!(matches!(Scene::from_json("{\"circle\": []}"), Err(Error::Scene(_))));
    }
}
