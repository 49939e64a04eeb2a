//! The two fixed meshes the kernel knows how to emit.
//!
//! Both shapes are plain compile-time tables: a list of points and a list of
//! faces whose indices are **1-based**, exactly as they are written to OBJ.

use crate::errors::ValidationError;
use crate::float_types::{CUBE_HALF_EXTENT, Real, TETRAHEDRON_RADIUS};
use nalgebra::Point3;

use std::fmt::{self, Display};
use std::str::FromStr;

/// How the coordinates of a shape are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordStyle {
    /// Shortest round-trip form that keeps a decimal point (`-1.0`, `1.0`).
    Literal,
    /// Fixed notation with six fractional digits (`1.500000`).
    Fixed,
}

impl CoordStyle {
    /// Render a single coordinate.
    pub fn format(self, value: Real) -> String {
        match self {
            CoordStyle::Literal => format!("{value:?}"),
            CoordStyle::Fixed => format!("{value:.6}"),
        }
    }
}

/// Immutable vertex and face tables for one shape.
#[derive(Debug, PartialEq)]
pub struct ShapeDefinition {
    points: &'static [[Real; 3]],
    faces: &'static [&'static [usize]],
    style: CoordStyle,
}

const H: Real = CUBE_HALF_EXTENT;
const R: Real = TETRAHEDRON_RADIUS;

static CUBE: ShapeDefinition = ShapeDefinition {
    points: &[
        [-H, -H, -H],
        [-H, -H, H],
        [-H, H, H],
        [-H, H, -H],
        [H, -H, -H],
        [H, -H, H],
        [H, H, H],
        [H, H, -H],
    ],
    // back, front, left, right, top, bottom
    faces: &[
        &[5, 8, 4, 1],
        &[2, 3, 7, 6],
        &[1, 4, 3, 2],
        &[6, 7, 8, 5],
        &[4, 8, 7, 3],
        &[5, 1, 2, 6],
    ],
    style: CoordStyle::Literal,
};

static TETRAHEDRON: ShapeDefinition = ShapeDefinition {
    points: &[
        [0.0, R, 0.0],
        [-R, -R, -R],
        [R, -R, -R],
        [0.0, -R, 2.0 * R],
    ],
    // back, right-front, left-front, bottom
    faces: &[&[1, 2, 3], &[1, 3, 4], &[1, 4, 2], &[2, 4, 3]],
    style: CoordStyle::Fixed,
};

impl ShapeDefinition {
    /// Raw coordinate triples, in output order.
    #[inline]
    pub const fn points(&self) -> &'static [[Real; 3]] {
        self.points
    }

    /// Faces as 1-based index lists, in output order.
    #[inline]
    pub const fn faces(&self) -> &'static [&'static [usize]] {
        self.faces
    }

    #[inline]
    pub const fn style(&self) -> CoordStyle {
        self.style
    }

    #[inline]
    pub const fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub const fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Points as `nalgebra` positions.
    pub fn positions(&self) -> impl Iterator<Item = Point3<Real>> + '_ {
        self.points.iter().map(|&[x, y, z]| Point3::new(x, y, z))
    }

    /// Check that every face is a polygon and only references existing vertices.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let vertex_count = self.vertex_count();
        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(ValidationError::DegenerateFace { face: i + 1, len: face.len() });
            }
            if let Some(&index) = face.iter().find(|&&idx| idx == 0 || idx > vertex_count) {
                return Err(ValidationError::IndexOutOfRange {
                    face: i + 1,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Selector for one of the fixed meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Axis-aligned cube spanning `[-1, 1]³`, six quad faces.
    Cube,
    /// Four-vertex tetrahedron, used as a stand-in for a sphere.
    Tetrahedron,
}

/// A shape id outside the recognized set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid shape ID: {0}")]
pub struct UnknownShape(pub i32);

/// A shape name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized shape: {0:?} (expected cube, tetrahedron, 1 or 2)")]
pub struct ParseShapeError(pub String);

impl Shape {
    pub const ALL: [Shape; 2] = [Shape::Cube, Shape::Tetrahedron];

    /// Integer id used at the `generate_shape` boundary.
    #[inline]
    pub const fn id(self) -> i32 {
        match self {
            Shape::Cube => 1,
            Shape::Tetrahedron => 2,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Tetrahedron => "tetrahedron",
        }
    }

    /// Stem used when naming generated model files.
    #[inline]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Tetrahedron => "sphere_sim",
        }
    }

    #[inline]
    pub const fn definition(self) -> &'static ShapeDefinition {
        match self {
            Shape::Cube => &CUBE,
            Shape::Tetrahedron => &TETRAHEDRON,
        }
    }
}

impl TryFrom<i32> for Shape {
    type Error = UnknownShape;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Shape::Cube),
            2 => Ok(Shape::Tetrahedron),
            other => Err(UnknownShape(other)),
        }
    }
}

impl From<Shape> for i32 {
    fn from(shape: Shape) -> Self {
        shape.id()
    }
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "cube" => Ok(Shape::Cube),
            "tetrahedron" | "tetra" | "sphere" | "sphere_sim" => Ok(Shape::Tetrahedron),
            _ => key
                .parse::<i32>()
                .ok()
                .and_then(|id| Shape::try_from(id).ok())
                .ok_or_else(|| ParseShapeError(s.to_string())),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
