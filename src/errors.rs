//! Validation errors

/// Structural problems a shape definition can have.
///
/// Face indices here are reported 1-based, the way they appear in OBJ output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// (IndexOutOfRange) A face references a vertex that does not exist
    #[error("(IndexOutOfRange) Face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    /// (DegenerateFace) A face has fewer than 3 indices
    #[error("(DegenerateFace) Face {face} has only {len} indices")]
    DegenerateFace { face: usize, len: usize },
}
