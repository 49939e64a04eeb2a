//! Map free-form text prompts onto one of the fixed shapes.
//!
//! This is plain keyword matching, not inference: the first keyword group that
//! appears anywhere in the lower-cased prompt wins, cube keywords first.

use crate::shapes::Shape;
use chrono::NaiveDateTime;

const CUBE_KEYWORDS: &[&str] = &["cube", "box", "square"];
const SPHERE_KEYWORDS: &[&str] = &["sphere", "ball", "round"];

/// Id returned by [`prompt_to_shape_id`] when no keyword matches.
pub const UNDETERMINED: i32 = 0;

/// Pick a shape for `prompt`, or `None` if no keyword matches.
///
/// ```rust
/// # use shapekernel::{prompt::classify_prompt, shapes::Shape};
/// assert_eq!(classify_prompt("A wooden Box"), Some(Shape::Cube));
/// assert_eq!(classify_prompt("a round ball"), Some(Shape::Tetrahedron));
/// assert_eq!(classify_prompt("a teapot"), None);
/// ```
pub fn classify_prompt(prompt: &str) -> Option<Shape> {
    let prompt = prompt.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| prompt.contains(k));

    if mentions(CUBE_KEYWORDS) {
        Some(Shape::Cube)
    } else if mentions(SPHERE_KEYWORDS) {
        Some(Shape::Tetrahedron)
    } else {
        None
    }
}

/// Integer form of [`classify_prompt`]; [`UNDETERMINED`] when nothing matches.
pub fn prompt_to_shape_id(prompt: &str) -> i32 {
    classify_prompt(prompt).map_or(UNDETERMINED, Shape::id)
}

/// File name for a model generated at `timestamp`, e.g. `cube_model_20250101_120000.obj`.
pub fn model_file_name(shape: Shape, timestamp: NaiveDateTime) -> String {
    format!("{}_model_{}.obj", shape.file_stem(), timestamp.format("%Y%m%d_%H%M%S"))
}
