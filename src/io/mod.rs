mod obj;

pub use obj::{emit, generate_shape, to_obj_string, write_obj};

use crate::shapes::UnknownShape;
use std::path::PathBuf;

/// Status returned by [`generate_shape`] on success.
pub const STATUS_OK: i32 = 0;
/// Status returned by [`generate_shape`] for every kind of failure.
pub const STATUS_FAILED: i32 = -1;

/// Errors raised while emitting a shape to a file.
///
/// None of these are retried. After any of them the destination must be
/// treated as holding no usable geometry.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The destination could not be opened for writing.
    #[error("Could not open file: {}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selector is not one of the known shapes.
    ///
    /// The destination has already been truncated when this is returned.
    #[error("Invalid shape ID: {0}")]
    UnknownShape(i32),

    /// The destination was opened but writing the records failed.
    #[error("Could not write to file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    /// Collapse the error into the integer status of the C-style entry point.
    #[inline]
    pub const fn status(&self) -> i32 {
        STATUS_FAILED
    }
}

impl From<UnknownShape> for EmitError {
    fn from(value: UnknownShape) -> Self {
        Self::UnknownShape(value.0)
    }
}
