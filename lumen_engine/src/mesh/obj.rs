//! A minimal reader for Wavefront OBJ files.
//!
//! Only the geometry needed for a [crate::mesh::triangle_mesh::TriangleMesh] is read:
//! - `v x y z` vertex positions
//! - `f a b c ...` faces, using one-based vertex indices. Faces with more than three vertices are split into a
//!   triangle fan, and any `/texture/normal` suffixes on an index are ignored
//!
//! Comments (`#`), blank lines and all other record types are skipped. Face normals are not read from the file,
//! they are calculated from the winding order of each triangle (see [crate::mesh::triangle::face_normal])

use crate::core::targets::OBJ;
use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::triangle::face_normal;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// The buffers loaded out of an OBJ file, in the layout [crate::mesh::triangle_mesh::TriangleMesh] expects
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjData {
    pub positions: Vec<Point3>,
    /// One normal per triangle
    pub normals: Vec<Vector3>,
    /// Three zero-based indices into [Self::positions] per triangle
    pub indices: Vec<usize>,
}

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("could not read obj data")]
    Io(#[from] std::io::Error),
    #[error("line {line}: could not parse {value:?} as a number")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: `{record}` record needs at least {expected} values, found {found}")]
    MissingValues {
        line: usize,
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: face index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { line: usize, index: usize, vertex_count: usize },
    /// The triangle has zero area, so no normal could be calculated for it
    #[error("line {line}: face is degenerate (zero area)")]
    DegenerateFace { line: usize },
}

/// A triangle read from the file, before its indices have been checked against the vertices
struct RawFace {
    line: usize,
    indices: [usize; 3],
}

/// Opens and parses the OBJ file at `path`. See [parse_obj]
pub fn load_obj(path: impl AsRef<Path>) -> Result<ObjData, ObjError> {
    let path = path.as_ref();
    debug!(target: OBJ, ?path, "loading obj file");
    let file = File::open(path).map_err(|err| {
        warn!(target: OBJ, ?path, %err, "could not open obj file");
        err
    })?;
    parse_obj(BufReader::new(file))
}

/// Parses OBJ data from a reader. See the [module docs](self) for what is supported
pub fn parse_obj(reader: impl BufRead) -> Result<ObjData, ObjError> {
    let mut positions = Vec::new();
    let mut faces = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = line_idx + 1;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let values = parts
                    .map(|v| parse_value::<Number>(line_num, v))
                    .collect::<Result<Vec<_>, _>>()?;
                // Extra values (such as the optional `w`) are ignored
                let &[x, y, z, ..] = values.as_slice() else {
                    return Err(ObjError::MissingValues {
                        line: line_num,
                        record: "v",
                        expected: 3,
                        found: values.len(),
                    });
                };
                positions.push(Point3::new(x, y, z));
            }
            Some("f") => {
                let indices = parts
                    .map(|v| parse_value::<usize>(line_num, v.split('/').next().unwrap_or(v)))
                    .collect::<Result<Vec<_>, _>>()?;
                if indices.len() < 3 {
                    return Err(ObjError::MissingValues {
                        line: line_num,
                        record: "f",
                        expected: 3,
                        found: indices.len(),
                    });
                }
                // Triangle fan around the first vertex
                faces.extend(indices.windows(2).skip(1).map(|pair| RawFace {
                    line: line_num,
                    indices: [indices[0], pair[0], pair[1]],
                }));
            }
            Some(other) if !other.starts_with('#') => {
                trace!(target: OBJ, line = line_num, record = other, "skipping unsupported record");
            }
            // Comment or blank
            _ => {}
        }
    }

    let mut data = ObjData {
        indices: Vec::with_capacity(faces.len() * 3),
        normals: Vec::with_capacity(faces.len()),
        positions,
    };
    for RawFace { line, indices } in faces {
        let mut vertices = [Point3::ZERO; 3];
        for (vertex, index) in vertices.iter_mut().zip(indices) {
            // Indices are one-based, so zero is always invalid
            let zero_based = index
                .checked_sub(1)
                .filter(|&i| i < data.positions.len())
                .ok_or(ObjError::IndexOutOfRange {
                    line,
                    index,
                    vertex_count: data.positions.len(),
                })?;
            *vertex = data.positions[zero_based];
            data.indices.push(zero_based);
        }

        let [v0, v1, v2] = vertices;
        data.normals.push(face_normal(v0, v1, v2).ok_or(ObjError::DegenerateFace { line })?);
    }

    debug!(
        target: OBJ,
        vertices = data.positions.len(),
        triangles = data.normals.len(),
        "parsed obj data"
    );
    Ok(data)
}

fn parse_value<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ObjError> {
    value.parse().map_err(|_| ObjError::InvalidNumber {
        line,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const QUAD: &str = "\
# A unit quad in the XY plane
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0

vn 0 0 1
f 1 2 3
f 1 3 4
";

    #[test]
    fn parses_quad() {
        let data = parse_obj(QUAD.as_bytes()).expect("quad is valid");

        assert_eq!(data.positions.len(), 4);
        assert_eq!(data.positions[2], Point3::new(1., 1., 0.));
        assert_eq!(data.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(data.normals.len(), 2);
        for n in &data.normals {
            assert_relative_eq!(*n, Vector3::Z);
        }
    }

    #[test]
    fn polygons_are_fanned_and_suffixes_ignored() {
        let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/1/1 2/2/1 3//1 4\n";
        let data = parse_obj(src.as_bytes()).expect("polygon is valid");
        assert_eq!(data.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn errors_report_line() {
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 zero 0\n".as_bytes()),
            Err(ObjError::InvalidNumber { line: 2, value }) if value == "zero"
        ));
        assert!(matches!(
            parse_obj("v 0 0\n".as_bytes()),
            Err(ObjError::MissingValues { line: 1, record: "v", expected: 3, found: 2 })
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\n".as_bytes()),
            Err(ObjError::MissingValues { line: 4, record: "f", .. })
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n".as_bytes()),
            Err(ObjError::IndexOutOfRange { line: 4, index: 4, vertex_count: 3 })
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n".as_bytes()),
            Err(ObjError::IndexOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            parse_obj("v 0 0 0\nv 1 0 0\nv 2 0 0\nf 1 2 3\n".as_bytes()),
            Err(ObjError::DegenerateFace { line: 4 })
        ));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_obj("".as_bytes()).expect("empty is valid"), ObjData::default());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_obj("this/file/does/not/exist.obj"),
            Err(ObjError::Io(_))
        ));
    }
}
