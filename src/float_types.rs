// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Circumradius-like constant the tetrahedron is built from.
///
/// Apex sits at `(0, r, 0)`, the base triangle at `y = -r`.
pub const TETRAHEDRON_RADIUS: Real = 1.5;

/// Half edge length of the cube, which spans `[-1, 1]` on every axis.
pub const CUBE_HALF_EXTENT: Real = 1.0;
