//! Support mapping based Cuboid shape.

use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, UnitVector, Vector, DIM};
use crate::shape::{
    ConvexPolyhedron, HalfEdgeEdge, HalfEdgeFace, HalfEdgeStructure, HalfEdgeVertex, Shape,
    ShapeType, SupportMap,
};
use std::sync::OnceLock;

// NOTE: format of the cuboid vertex and face indices:
//
// Vertex `i`: the `k`-th bit of `i` is set to 1 iff. the `k`-th component of the vertex is positive.
// Face `f`: the face normal is along the axis `f / 2`, toward the positive side if `f` is even
//           and toward the negative side if `f` is odd (+x, -x, +y, -y, +z, -z).
const CUBOID_FACES: [[u32; 4]; 6] = [
    [1, 3, 7, 5],
    [0, 4, 6, 2],
    [2, 6, 7, 3],
    [0, 1, 5, 4],
    [4, 5, 7, 6],
    [0, 2, 3, 1],
];

fn cuboid_topology() -> &'static HalfEdgeStructure {
    static TOPOLOGY: OnceLock<HalfEdgeStructure> = OnceLock::new();
    TOPOLOGY.get_or_init(|| {
        HalfEdgeStructure::from_faces(8, &CUBOID_FACES)
            .expect("The cuboid faces form a closed, consistently oriented, surface.")
    })
}

/// Shape of a box.
#[derive(PartialEq, Debug, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
    margin: Real,
    topology: &'static HalfEdgeStructure,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        assert!(
            half_extents.iter().all(|e| *e >= 0.0),
            "The cuboid half-extents must be positive."
        );
        Cuboid {
            half_extents,
            margin: 0.0,
            topology: cuboid_topology(),
        }
    }

    /// Sets the margin inflating this cuboid.
    ///
    /// # Panics
    ///
    /// Panics if `margin` is negative.
    #[must_use]
    pub fn with_margin(mut self, margin: Real) -> Self {
        assert!(margin >= 0.0, "The cuboid margin must be positive.");
        self.margin = margin;
        self
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.half_extents
            .zip_map(dir, |h, d| if d >= 0.0 { h } else { -h })
            .into()
    }
}

impl Shape for Cuboid {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }

    fn compute_local_aabb(&self) -> Aabb {
        let half_extents = self.half_extents.add_scalar(self.margin);
        Aabb::new((-half_extents).into(), half_extents.into())
    }

    #[inline]
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        (0..DIM).all(|i| pt[i].abs() <= self.half_extents[i])
    }

    fn local_inertia_tensor(&self, mass: Real) -> Matrix<Real> {
        let sq = self.half_extents.component_mul(&self.half_extents);
        let diag = Vector::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * (mass / 3.0);
        Matrix::from_diagonal(&diag)
    }

    fn as_convex_polyhedron(&self) -> Option<&dyn ConvexPolyhedron> {
        Some(self as &dyn ConvexPolyhedron)
    }
}

impl ConvexPolyhedron for Cuboid {
    #[inline]
    fn num_faces(&self) -> u32 {
        self.topology.num_faces()
    }

    #[inline]
    fn face(&self, i: u32) -> &HalfEdgeFace {
        self.topology.face(i)
    }

    #[inline]
    fn num_vertices(&self) -> u32 {
        self.topology.num_vertices()
    }

    #[inline]
    fn vertex(&self, i: u32) -> HalfEdgeVertex {
        self.topology.vertex(i)
    }

    fn vertex_position(&self, i: u32) -> Point<Real> {
        assert!(i < 8, "Cuboid vertex index out of bounds (must be < 8).");
        let mut res = -self.half_extents;

        for k in 0..DIM {
            if i & (1 << k) != 0 {
                res[k] = -res[k];
            }
        }

        Point::from(res)
    }

    fn face_normal(&self, i: u32) -> UnitVector<Real> {
        assert!(i < 6, "Cuboid face index out of bounds (must be < 6).");
        let mut normal = Vector::zeros();
        normal[i as usize / 2] = if i % 2 == 0 { 1.0 } else { -1.0 };
        UnitVector::new_unchecked(normal)
    }

    #[inline]
    fn num_half_edges(&self) -> u32 {
        self.topology.num_half_edges()
    }

    #[inline]
    fn half_edge(&self, i: u32) -> &HalfEdgeEdge {
        self.topology.half_edge(i)
    }

    #[inline]
    fn centroid(&self) -> Point<Real> {
        Point::origin()
    }
}
