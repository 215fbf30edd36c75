//! Half-edge description of the connectivity of convex polyhedra.
//!
//! Vertices, directed edges and faces are stored in flat arrays and refer to each other
//! through `u32` indices. Each undirected edge of the polyhedron is represented by two
//! half-edges of opposite directions (twins), each bordering one of the two faces adjacent
//! to the edge.

use smallvec::SmallVec;
use std::collections::HashMap;

/// The vertex record of a half-edge structure.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct HalfEdgeVertex {
    /// Index of this vertex.
    pub vertex_index: u32,
    /// Index of one half-edge originating from this vertex.
    pub edge_index: u32,
}

impl HalfEdgeVertex {
    /// Creates a new vertex record.
    #[inline]
    pub fn new(vertex_index: u32, edge_index: u32) -> Self {
        Self {
            vertex_index,
            edge_index,
        }
    }
}

/// A directed edge of a half-edge structure.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct HalfEdgeEdge {
    /// Index of the half-edge with the opposite direction.
    pub twin_edge: u32,
    /// Index of the face bordered by this half-edge.
    pub face: u32,
    /// Index of the next half-edge around `face`.
    pub next_edge: u32,
    /// Index of the vertex this half-edge originates from.
    pub vertex: u32,
}

impl HalfEdgeEdge {
    /// Creates a new half-edge record.
    #[inline]
    pub const fn new(vertex: u32, twin_edge: u32, face: u32, next_edge: u32) -> Self {
        Self {
            twin_edge,
            face,
            next_edge,
            vertex,
        }
    }
}

/// A face of a half-edge structure.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct HalfEdgeFace {
    /// The vertices bounding this face, in counter-clockwise order seen from outside.
    pub vertices: SmallVec<[u32; 4]>,
    /// Index of the half-edge originating from `vertices[0]` and bordering this face.
    pub edge_index: u32,
}

impl HalfEdgeFace {
    /// Creates a face from its ordered vertices and its first half-edge.
    pub fn new(vertices: &[u32], edge_index: u32) -> Self {
        Self {
            vertices: SmallVec::from_slice(vertices),
            edge_index,
        }
    }
}

/// Error raised when a set of faces does not describe a closed, consistently oriented,
/// polyhedral surface.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A face has less than three vertices.
    #[error("the face {0} has less than three vertices.")]
    DegenerateFace(u32),
    /// A face references a vertex that does not exist.
    #[error("the face {face} references the vertex {vertex} which is out of bounds.")]
    VertexOutOfBounds {
        /// The face referencing the invalid vertex.
        face: u32,
        /// The invalid vertex index.
        vertex: u32,
    },
    /// The same directed edge appears twice, meaning two adjacent faces have opposite
    /// orientations or an edge is shared by more than two faces.
    #[error("the directed edge {edge:?} appears more than once.")]
    DuplicateHalfEdge {
        /// The directed edge, as a pair of vertex indices.
        edge: (u32, u32),
    },
    /// A half-edge has no twin, meaning the surface is not closed.
    #[error("the half-edge {edge:?} has no twin.")]
    MissingTwin {
        /// The directed edge, as a pair of vertex indices.
        edge: (u32, u32),
    },
    /// A vertex is not referenced by any face.
    #[error("the vertex {0} is not referenced by any face.")]
    IsolatedVertex(u32),
    /// A half-edge record violates one of the structural invariants.
    #[error("the half-edge {0} breaks the twin/next invariants.")]
    InconsistentHalfEdge(u32),
}

/// The connectivity of a closed polyhedron, stored as a half-edge structure.
///
/// The structure is built once from a list of faces and is then read-only.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct HalfEdgeStructure {
    vertices: Vec<HalfEdgeVertex>,
    edges: Vec<HalfEdgeEdge>,
    faces: Vec<HalfEdgeFace>,
}

impl HalfEdgeStructure {
    /// Builds the half-edge structure of a closed polyhedron with `num_vertices` vertices.
    ///
    /// Each face lists its vertices in counter-clockwise order when seen from outside the
    /// polyhedron. Half-edges are numbered face after face, following the vertex order of
    /// each face.
    pub fn from_faces<F>(num_vertices: u32, faces: &[F]) -> Result<Self, TopologyError>
    where
        F: AsRef<[u32]>,
    {
        let mut edges = Vec::new();
        let mut half_faces = Vec::with_capacity(faces.len());
        let mut vertex_edge = vec![u32::MAX; num_vertices as usize];
        let mut directed_edges = HashMap::new();

        for (fid, face) in faces.iter().enumerate() {
            let face = face.as_ref();
            let fid = fid as u32;

            if face.len() < 3 {
                return Err(TopologyError::DegenerateFace(fid));
            }

            let first_edge = edges.len() as u32;

            for (k, &v) in face.iter().enumerate() {
                if v >= num_vertices {
                    return Err(TopologyError::VertexOutOfBounds {
                        face: fid,
                        vertex: v,
                    });
                }

                let eid = first_edge + k as u32;
                let next_v = face[(k + 1) % face.len()];
                let next_eid = first_edge + ((k + 1) % face.len()) as u32;

                if directed_edges.insert((v, next_v), eid).is_some() {
                    return Err(TopologyError::DuplicateHalfEdge { edge: (v, next_v) });
                }

                if vertex_edge[v as usize] == u32::MAX {
                    vertex_edge[v as usize] = eid;
                }

                // The twin is resolved once every face has been visited.
                edges.push(HalfEdgeEdge::new(v, u32::MAX, fid, next_eid));
            }

            half_faces.push(HalfEdgeFace::new(face, first_edge));
        }

        for eid in 0..edges.len() {
            let v1 = edges[eid].vertex;
            let v2 = edges[edges[eid].next_edge as usize].vertex;

            match directed_edges.get(&(v2, v1)) {
                Some(&twin) => edges[eid].twin_edge = twin,
                None => return Err(TopologyError::MissingTwin { edge: (v1, v2) }),
            }
        }

        let mut vertices = Vec::with_capacity(num_vertices as usize);

        for (vid, &eid) in vertex_edge.iter().enumerate() {
            if eid == u32::MAX {
                return Err(TopologyError::IsolatedVertex(vid as u32));
            }

            vertices.push(HalfEdgeVertex::new(vid as u32, eid));
        }

        log::trace!(
            "Built half-edge structure with {} vertices, {} half-edges and {} faces.",
            vertices.len(),
            edges.len(),
            half_faces.len()
        );

        Ok(Self {
            vertices,
            edges,
            faces: half_faces,
        })
    }

    /// The number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// The number of half-edges.
    #[inline]
    pub fn num_half_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    /// The number of faces.
    #[inline]
    pub fn num_faces(&self) -> u32 {
        self.faces.len() as u32
    }

    /// The `i`-th vertex record.
    #[inline]
    pub fn vertex(&self, i: u32) -> HalfEdgeVertex {
        self.vertices[i as usize]
    }

    /// The `i`-th half-edge record.
    #[inline]
    pub fn half_edge(&self, i: u32) -> &HalfEdgeEdge {
        &self.edges[i as usize]
    }

    /// The `i`-th face record.
    #[inline]
    pub fn face(&self, i: u32) -> &HalfEdgeFace {
        &self.faces[i as usize]
    }
}
