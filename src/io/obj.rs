use super::{EmitError, STATUS_OK};
use crate::shapes::Shape;
use log::{debug, error, info};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export to Wavefront OBJ text
///
/// All `v` records come first, then all `f` records. Face indices are 1-based
/// and carry no texture or normal references.
///
/// ```rust
/// # use shapekernel::{io::to_obj_string, shapes::Shape};
/// let text = to_obj_string(Shape::Tetrahedron);
/// assert!(text.starts_with("v 0.000000 1.500000 0.000000\n"));
/// ```
pub fn to_obj_string(shape: Shape) -> String {
    let definition = shape.definition();
    let style = definition.style();
    let mut out = String::new();

    for &[x, y, z] in definition.points() {
        out.push_str(&format!(
            "v {} {} {}\n",
            style.format(x),
            style.format(y),
            style.format(z)
        ));
    }

    for face in definition.faces() {
        out.push('f');
        for index in face.iter() {
            out.push_str(&format!(" {index}"));
        }
        out.push('\n');
    }

    out
}

/// Write the OBJ records of `shape` to any writer.
pub fn write_obj<W: Write>(shape: Shape, writer: &mut W) -> std::io::Result<()> {
    let text = to_obj_string(shape);
    writer.write_all(text.as_bytes())?;
    debug!("wrote {} bytes of {} OBJ data", text.len(), shape);
    Ok(())
}

/// Emit the shape selected by `shape_id` as OBJ text into `path`.
///
/// The destination is opened (and truncated) before the id is checked, so an
/// unknown id leaves an empty file behind. The handle is released on every
/// return path.
pub fn emit<P: AsRef<Path>>(shape_id: i32, path: P) -> Result<(), EmitError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| {
        error!("Could not open file: {}", path.display());
        EmitError::DestinationUnavailable { path: path.to_path_buf(), source }
    })?;

    info!("Generating geometry for shape ID {shape_id} into {}...", path.display());

    let shape = Shape::try_from(shape_id).inspect_err(|err| error!("{err}"))?;

    let mut writer = BufWriter::new(file);
    write_obj(shape, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| {
            error!("Could not write to file: {}", path.display());
            EmitError::Write { path: path.to_path_buf(), source }
        })?;

    info!("{} OBJ data written successfully.", shape);
    Ok(())
}

/// C-style entry point: `0` on success, `-1` on any failure.
pub fn generate_shape<P: AsRef<Path>>(shape_id: i32, output_path: P) -> i32 {
    match emit(shape_id, output_path) {
        Ok(()) => STATUS_OK,
        Err(err) => err.status(),
    }
}

impl Shape {
    /// OBJ text of this shape.
    pub fn to_obj(self) -> String {
        to_obj_string(self)
    }

    /// Write this shape to `path`, creating or truncating the file.
    pub fn write_obj_file<P: AsRef<Path>>(self, path: P) -> Result<(), EmitError> {
        emit(self.id(), path)
    }
}
