//! Test support library
//! Provides the reference OBJ texts and a small OBJ reader for tests.

#![allow(dead_code)]

use shapekernel::float_types::Real;
use std::path::Path;

/// Exact file contents expected for the cube.
pub const CUBE_OBJ: &str = "\
v -1.0 -1.0 -1.0
v -1.0 -1.0 1.0
v -1.0 1.0 1.0
v -1.0 1.0 -1.0
v 1.0 -1.0 -1.0
v 1.0 -1.0 1.0
v 1.0 1.0 1.0
v 1.0 1.0 -1.0
f 5 8 4 1
f 2 3 7 6
f 1 4 3 2
f 6 7 8 5
f 4 8 7 3
f 5 1 2 6
";

/// Exact file contents expected for the tetrahedron.
pub const TETRAHEDRON_OBJ: &str = "\
v 0.000000 1.500000 0.000000
v -1.500000 -1.500000 -1.500000
v 1.500000 -1.500000 -1.500000
v 0.000000 -1.500000 3.000000
f 1 2 3
f 1 3 4
f 1 4 2
f 2 4 3
";

/// Vertex and face records read back from an OBJ file.
#[derive(Debug, Default)]
pub struct ObjRecords {
    pub vertices: Vec<[Real; 3]>,
    pub faces: Vec<Vec<usize>>,
}

/// Parse the `v` and `f` records of `text`, panicking on anything else.
pub fn parse_obj(text: &str) -> ObjRecords {
    let mut records = ObjRecords::default();
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords: Vec<Real> = parts.map(|p| p.parse().unwrap()).collect();
                assert_eq!(coords.len(), 3, "vertex line needs 3 coordinates: {line:?}");
                records.vertices.push([coords[0], coords[1], coords[2]]);
            },
            Some("f") => {
                records.faces.push(parts.map(|p| p.parse().unwrap()).collect());
            },
            other => panic!("unexpected OBJ record {other:?} in line {line:?}"),
        }
    }
    records
}

/// Read and parse an OBJ file.
pub fn read_obj(path: &Path) -> ObjRecords {
    parse_obj(&std::fs::read_to_string(path).unwrap())
}
