use crate::core::targets::MESH;
use crate::core::types::{MaterialIndex, Number, Point3, Vector3};
use crate::mesh::obj::ObjData;
use crate::mesh::triangle::{face_normal, CullMode, Triangle};
use crate::mesh::Mesh;
use crate::shared::hit::HitRecord;
use crate::shared::ray::Ray;
use getset::{CopyGetters, Getters, Setters};
use thiserror::Error;
use tracing::{trace, warn};
use valuable::Valuable;

/// Reasons a triangle mesh could not be created from the given buffers
#[derive(Error, Copy, Clone, Debug, PartialEq, Valuable)]
pub enum MeshError {
    /// Every face takes three consecutive indices, so any other length leaves a partial face
    #[error("index buffer length ({len}) is not a multiple of 3")]
    PartialFace { len: usize },
    #[error("index {index} (at position {position} in the index buffer) is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        vertex_count: usize,
    },
    /// There must be exactly one normal per face
    #[error("expected {expected} face normals (one per face), got {actual}")]
    NormalCountMismatch { expected: usize, actual: usize },
    #[error("normal of face {face} is not normalised (length {length})")]
    NonUnitNormal { face: usize, length: Number },
    /// The face has zero area, so no normal could be calculated for it
    #[error("face {face} is degenerate (zero area)")]
    DegenerateFace { face: usize },
}

/// A mesh made of indexed triangles, with a precomputed normal per face.
///
/// All faces share the same cull mode and material.
///
/// # Invariants
/// These are checked on construction, and the buffers cannot be modified afterwards:
/// - The index buffer holds three indices per face, each of which is a valid vertex
/// - There is one normalised normal per face
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters, Setters)]
pub struct TriangleMesh {
    #[get = "pub"]
    positions: Vec<Point3>,
    /// Normal for each face, in the same order as the faces appear in the index buffer
    #[get = "pub"]
    normals: Vec<Vector3>,
    /// Flat index buffer, with three (zero-based) indices into [Self::positions] per face
    #[get = "pub"]
    indices: Vec<usize>,
    #[getset(get_copy = "pub", set = "pub")]
    cull_mode: CullMode,
    #[getset(get_copy = "pub", set = "pub")]
    material: MaterialIndex,
}

// region Constructors

impl TriangleMesh {
    /// Creates a new mesh from the vertex, face normal and index buffers
    pub fn new(
        positions: impl Into<Vec<Point3>>,
        normals: impl Into<Vec<Vector3>>,
        indices: impl Into<Vec<usize>>,
        cull_mode: CullMode,
        material: MaterialIndex,
    ) -> Result<Self, MeshError> {
        let (positions, normals, indices) = (positions.into(), normals.into(), indices.into());

        Self::validate_indices(&positions, &indices)?;
        let face_count = indices.len() / 3;
        if normals.len() != face_count {
            return Err(MeshError::NormalCountMismatch {
                expected: face_count,
                actual: normals.len(),
            });
        }
        if let Some((face, n)) = normals.iter().enumerate().find(|(_, n)| !n.is_normalized()) {
            return Err(MeshError::NonUnitNormal { face, length: n.length() });
        }

        trace!(target: MESH, vertices = positions.len(), faces = face_count, ?cull_mode, material, "created triangle mesh");
        Ok(Self {
            positions,
            normals,
            indices,
            cull_mode,
            material,
        })
    }

    /// Creates a new mesh from the vertex and index buffers, calculating the face normals from the winding order.
    ///
    /// See [face_normal]
    pub fn from_positions(
        positions: impl Into<Vec<Point3>>,
        indices: impl Into<Vec<usize>>,
        cull_mode: CullMode,
        material: MaterialIndex,
    ) -> Result<Self, MeshError> {
        let (positions, indices) = (positions.into(), indices.into());

        Self::validate_indices(&positions, &indices)?;
        let normals = indices
            .chunks_exact(3)
            .enumerate()
            .map(|(face, idx)| {
                face_normal(positions[idx[0]], positions[idx[1]], positions[idx[2]])
                    .ok_or(MeshError::DegenerateFace { face })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(positions, normals, indices, cull_mode, material)
    }

    /// Creates a new mesh from the data loaded out of an OBJ file. See [crate::mesh::obj]
    pub fn from_obj(data: ObjData, cull_mode: CullMode, material: MaterialIndex) -> Result<Self, MeshError> {
        let ObjData {
            positions,
            normals,
            indices,
        } = data;
        Self::new(positions, normals, indices, cull_mode, material)
    }

    fn validate_indices(positions: &[Point3], indices: &[usize]) -> Result<(), MeshError> {
        if indices.len() % 3 != 0 {
            warn!(target: MESH, len = indices.len(), "index buffer has a partial face");
            return Err(MeshError::PartialFace { len: indices.len() });
        }
        if let Some((position, &index)) = indices.iter().enumerate().find(|&(_, &i)| i >= positions.len()) {
            warn!(target: MESH, position, index, vertex_count = positions.len(), "index out of bounds");
            return Err(MeshError::IndexOutOfBounds {
                position,
                index,
                vertex_count: positions.len(),
            });
        }
        Ok(())
    }
}

// endregion Constructors

impl TriangleMesh {
    pub fn face_count(&self) -> usize { self.normals.len() }

    /// Iterates over the faces of the mesh, as standalone triangles
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices
            .chunks_exact(3)
            .zip(&self.normals)
            .map(|(idx, &normal)| Triangle {
                v0: self.positions[idx[0]],
                v1: self.positions[idx[1]],
                v2: self.positions[idx[2]],
                normal,
                cull_mode: self.cull_mode,
                material: self.material,
            })
    }
}

impl Mesh for TriangleMesh {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        self.triangles()
            .fold(None, |closest, tri| HitRecord::closest(closest, tri.intersect(ray)))
    }

    fn intersects(&self, ray: &Ray) -> bool { self.triangles().any(|tri| tri.intersects(ray)) }
}
