use std::fs;

use charpic::{Error, Scene};

#[test]
fn demo_scene_matches_builtin_demo() {
    let src = fs::read_to_string("tests/scenes/demo.json").expect("read fixture");
    let picture = Scene::from_json(&src).expect("parse scene").build().expect("build scene");
    assert_eq!(picture.to_string(), charpic::demo::demo_picture().to_string());
}

#[test]
fn scene_with_styled_frames() {
    let src = r##"{"hcat": [
        {"frame": {"picture": {"text": ["a"]}, "margin": 0, "frame_char": "#"}},
        {"frame": {"picture": {"text": ["b"]}, "margin": 0, "frame_char": "+"}}
    ]}"##;
    let picture = Scene::from_json(src).unwrap().build().unwrap();
    assert_eq!(picture.rows(), vec!["###+++", "#a#+b+", "###+++"]);
}

#[test]
fn invalid_scenes_are_reported() {
    let negative = r#"{"frame": {"picture": {"text": []}, "margin": -1}}"#;
    let err = Scene::from_json(negative).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let control = r#"{"frame": {"picture": {"text": []}, "frame_char": "\n"}}"#;
    let err = Scene::from_json(control).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    assert!(matches!(Scene::from_json("not json"), Err(Error::Scene(_))));
}

#[test]
fn oversized_margins_are_rejected() {
    let src = r#"{"vcat": [
        {"text": ["x"]},
        {"frame": {"picture": {"text": ["y"]}, "margin": 9223372036854775807}}
    ]}"#;
    let err = Scene::from_json(src).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("margin"));

    let at_limit = format!(
        r#"{{"frame": {{"picture": {{"text": []}}, "margin": {}}}}}"#,
        charpic::style::MAX_MARGIN
    );
    let picture = Scene::from_json(&at_limit).unwrap().build().unwrap();
    assert_eq!(picture.width(), 2 + 2 * charpic::style::MAX_MARGIN);
}

#[test]
fn multi_line_text_entries_are_rejected() {
    let src = r#"{"hcat": [{"text": ["fine"]}, {"text": ["two\nlines"]}]}"#;
    let err = Scene::from_json(src).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}
