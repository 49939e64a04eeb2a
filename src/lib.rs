//! A tiny geometry kernel that writes one of two **fixed meshes** as
//! [Wavefront OBJ](https://en.wikipedia.org/wiki/Wavefront_.obj_file) text.
//!
//! | id | shape | vertices | faces |
//! |----|-------|----------|-------|
//! | 1  | cube spanning `[-1, 1]³` | 8 | 6 quads |
//! | 2  | tetrahedron ("sphere simulation"), r = 1.5 | 4 | 4 triangles |
//!
//! ```no_run
//! use shapekernel::io::{emit, generate_shape};
//!
//! emit(1, "cube.obj")?;
//! assert_eq!(generate_shape(2, "sphere_sim.obj"), 0);
//! # Ok::<(), shapekernel::io::EmitError>(())
//! ```
//!
//! The `cdylib` build exports `int generate_shape(int, const char*)`, see [`ffi`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![deny(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod errors;
pub mod ffi;
pub mod float_types;
pub mod io;
pub mod prompt;
pub mod shapes;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use io::{EmitError, emit, generate_shape};
pub use shapes::Shape;
