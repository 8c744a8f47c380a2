/// The sample composition printed by `charpic demo`

use crate::picture::{frame, hcat, vcat, Picture};

/// Two framed blocks side by side, the right one with a caption underneath,
/// all inside an outer frame.
pub fn demo_picture() -> Picture {
    let pic1 = Picture::new(["This is a picture", "with multiple lines."]);
    let pic2 = Picture::new(["It should work just fine."]);
    let pic3 = Picture::new(["This should be expected", "on the right of the other image."]);

    frame(&hcat(&frame(&pic1), &vcat(&frame(&pic3), &pic2)))
}
