//! Definition of the triangle shape used by triangle meshes and heightfields.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Matrix, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{
    ConvexPolyhedron, HalfEdgeEdge, HalfEdgeFace, HalfEdgeVertex, Shape, ShapeType, SupportMap,
};
use crate::utils::{self, DEGENERATE_NORMAL_EPSILON};

use na::Unit;

/// The faces of a triangle ray casts are allowed to hit.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TriangleRaycastSide {
    /// Only rays travelling against the triangle normal can hit it.
    Front,
    /// Only rays travelling along the triangle normal can hit it.
    Back,
    /// Rays can hit both faces of the triangle.
    #[default]
    FrontAndBack,
}

/// An opaque identifier assigned to a shape by the container that created it.
///
/// The broad phase uses it as a key for caching collision state across simulation steps.
/// It is never interpreted by the shape itself.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

/// Error raised when building a triangle shape from invalid geometry.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleShapeError {
    /// The three vertices are collinear, or at least two of them are identical.
    #[error("the triangle vertices are collinear or duplicated.")]
    DegenerateTriangle,
    /// A vertex normal is zero or not finite.
    #[error("the normal of the vertex {0} is zero or not finite.")]
    DegenerateVertexNormal(u32),
}

// Fixed connectivity shared by all triangles: half-edges 0, 2, 4 go around the front face
// (0 -> 1 -> 2) and their twins 1, 5, 3 go around the back face (1 -> 0 -> 2).
const TRIANGLE_HALF_EDGES: [HalfEdgeEdge; 6] = [
    HalfEdgeEdge::new(0, 1, 0, 2),
    HalfEdgeEdge::new(1, 0, 1, 5),
    HalfEdgeEdge::new(1, 3, 0, 4),
    HalfEdgeEdge::new(2, 2, 1, 1),
    HalfEdgeEdge::new(2, 5, 0, 0),
    HalfEdgeEdge::new(0, 4, 1, 3),
];

/// A triangle of a triangle mesh or heightfield, seen as a flat convex polyhedron.
///
/// The triangle has two faces of opposite normals (its front face, `0`, and its back face,
/// `1`), three vertices, and six half-edges. It also stores one normal per vertex which is
/// only used to smooth contact normals across the edges shared with neighboring triangles.
///
/// A `TriangleShape` is owned by the mesh that built it and is neither `Clone` nor `Copy`:
/// collision pairs and caches only borrow it.
#[derive(Debug)]
pub struct TriangleShape {
    vertices: [Point<Real>; 3],
    normal: UnitVector<Real>,
    vertex_normals: [UnitVector<Real>; 3],
    raycast_side: TriangleRaycastSide,
    faces: [HalfEdgeFace; 2],
    margin: Real,
    id: ShapeId,
}

static_assertions::assert_impl_all!(TriangleShape: Send, Sync);
static_assertions::assert_not_impl_any!(TriangleShape: Clone, Copy);

impl TriangleShape {
    /// Creates a triangle from its three vertices, their normals and an identifier.
    ///
    /// The front face normal is `(b - a) × (c - a)` normalized, where `[a, b, c] = vertices`.
    /// Vertex normals are normalized. The triangle can be hit by rays on both sides and has
    /// no margin; see [`Self::set_raycast_side`] and [`Self::with_margin`].
    ///
    /// Fails if the triangle is degenerate or if a vertex normal cannot be normalized.
    pub fn new(
        vertices: [Point<Real>; 3],
        vertex_normals: [Vector<Real>; 3],
        id: ShapeId,
    ) -> Result<Self, TriangleShapeError> {
        const EPS: Real = DEFAULT_EPSILON * 100.0;

        let [a, b, c] = vertices;
        let (ab, ac) = (b - a, c - a);
        let scaled_normal = ab.cross(&ac);

        // `|ab × ac|² = |ab|² |ac|² sin²(θ)`, so this bounds the angle at `a` whatever the
        // size of the triangle. Duplicate vertices give `0 <= 0`.
        if !scaled_normal.iter().all(|x| x.is_finite())
            || scaled_normal.norm_squared() <= EPS * EPS * ab.norm_squared() * ac.norm_squared()
        {
            return Err(TriangleShapeError::DegenerateTriangle);
        }

        let normal = Unit::new_normalize(scaled_normal);
        let mut unit_normals = [normal; 3];

        for (i, n) in vertex_normals.iter().enumerate() {
            unit_normals[i] = n
                .iter()
                .all(|x| x.is_finite())
                .then(|| Unit::try_new(*n, DEFAULT_EPSILON))
                .flatten()
                .ok_or(TriangleShapeError::DegenerateVertexNormal(i as u32))?;
        }

        Ok(TriangleShape {
            vertices,
            normal,
            vertex_normals: unit_normals,
            raycast_side: TriangleRaycastSide::default(),
            faces: [
                HalfEdgeFace::new(&[0, 1, 2], 0),
                HalfEdgeFace::new(&[1, 0, 2], 1),
            ],
            margin: 0.0,
            id,
        })
    }

    /// Sets the margin inflating this triangle.
    ///
    /// # Panics
    ///
    /// Panics if `margin` is negative.
    #[must_use]
    pub fn with_margin(mut self, margin: Real) -> Self {
        assert!(margin >= 0.0, "The triangle margin must be positive.");
        self.margin = margin;
        self
    }

    /// The identifier given to this triangle by its container.
    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 3] {
        &self.vertices
    }

    /// The unit normals of the three vertices of this triangle.
    #[inline]
    pub fn vertex_normals(&self) -> &[UnitVector<Real>; 3] {
        &self.vertex_normals
    }

    /// The normal of the front face of this triangle.
    #[inline]
    pub fn normal(&self) -> UnitVector<Real> {
        self.normal
    }

    /// The faces ray casts are allowed to hit.
    #[inline]
    pub fn raycast_side(&self) -> TriangleRaycastSide {
        self.raycast_side
    }

    /// Sets the faces ray casts are allowed to hit.
    #[inline]
    pub fn set_raycast_side(&mut self, side: TriangleRaycastSide) {
        self.raycast_side = side;
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a)).norm() * 0.5
    }

    /// The per-axis bounds of this triangle, enlarged by its margin.
    pub fn local_bounds(&self) -> (Point<Real>, Point<Real>) {
        let [a, b, c] = &self.vertices;
        let margin = Vector::repeat(self.margin);
        let mins = a.coords.inf(&b.coords).inf(&c.coords) - margin;
        let maxs = a.coords.sup(&b.coords).sup(&c.coords) + margin;
        (mins.into(), maxs.into())
    }

    /// Computes the barycentric coordinates of the projection of `pt` on the plane of this
    /// triangle.
    ///
    /// The coordinates `[u, v, w]` are not clamped: they fall outside of `[0, 1]` when `pt` is
    /// not above the triangle.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> [Real; 3] {
        let [a, b, c] = &self.vertices;
        // Construction rejects triangles whose normal has a zero norm, so this is never `None`.
        utils::triangle_barycentric_coordinates(a, b, c, pt).unwrap_or([1.0 / 3.0; 3])
    }

    /// The smooth contact normal of this triangle at the given local point.
    ///
    /// This is the barycentric interpolation of the vertex normals at the projection of `pt`
    /// on the triangle. The flat front face normal is returned instead if the interpolated
    /// normal is degenerate, or if it points more than 90 degrees away from the front face
    /// normal (which indicates inconsistent vertex normals).
    pub fn smooth_local_contact_normal(&self, pt: &Point<Real>) -> UnitVector<Real> {
        let [u, v, w] = utils::clamp_to_simplex(self.barycentric_coordinates(pt));
        let [n0, n1, n2] = &self.vertex_normals;
        let interpolated = n0.into_inner() * u + n1.into_inner() * v + n2.into_inner() * w;

        match Unit::try_new(interpolated, DEGENERATE_NORMAL_EPSILON) {
            Some(smooth) if smooth.dot(&*self.normal) >= 0.0 => smooth,
            _ => {
                log::debug!(
                    "Triangle {:?}: inconsistent vertex normals at {:?}, using the face normal.",
                    self.id,
                    pt
                );
                self.normal
            }
        }
    }
}

impl SupportMap for TriangleShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let dots = self.vertices.map(|v| v.coords.dot(dir));
        let mut best = 0;

        if dots[1] > dots[best] {
            best = 1;
        }
        if dots[2] > dots[best] {
            best = 2;
        }

        self.vertices[best]
    }
}

impl Shape for TriangleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    #[inline]
    fn margin(&self) -> Real {
        self.margin
    }

    fn compute_local_aabb(&self) -> Aabb {
        let (mins, maxs) = self.local_bounds();
        Aabb::new(mins, maxs)
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        let mut aabb = Aabb::from_points(self.vertices.map(|v| position * v));
        aabb.mins -= Vector::repeat(self.margin);
        aabb.maxs += Vector::repeat(self.margin);
        aabb
    }

    /// A triangle has no interior: this always returns `false`.
    #[inline]
    fn contains_local_point(&self, _: &Point<Real>) -> bool {
        false
    }

    /// Mesh triangles are never simulated as dynamic bodies: this returns the zero matrix.
    #[inline]
    fn local_inertia_tensor(&self, _: Real) -> Matrix<Real> {
        Matrix::zeros()
    }

    fn as_convex_polyhedron(&self) -> Option<&dyn ConvexPolyhedron> {
        Some(self as &dyn ConvexPolyhedron)
    }

    fn as_triangle_shape(&self) -> Option<&TriangleShape> {
        Some(self)
    }
}

impl ConvexPolyhedron for TriangleShape {
    #[inline]
    fn num_faces(&self) -> u32 {
        2
    }

    #[inline]
    fn face(&self, i: u32) -> &HalfEdgeFace {
        assert!(i < 2, "Triangle face index out of bounds (must be < 2).");
        &self.faces[i as usize]
    }

    #[inline]
    fn num_vertices(&self) -> u32 {
        3
    }

    #[inline]
    fn vertex(&self, i: u32) -> HalfEdgeVertex {
        assert!(i < 3, "Triangle vertex index out of bounds (must be < 3).");
        HalfEdgeVertex::new(i, 2 * i)
    }

    #[inline]
    fn vertex_position(&self, i: u32) -> Point<Real> {
        assert!(i < 3, "Triangle vertex index out of bounds (must be < 3).");
        self.vertices[i as usize]
    }

    #[inline]
    fn face_normal(&self, i: u32) -> UnitVector<Real> {
        match i {
            0 => self.normal,
            1 => -self.normal,
            _ => panic!("Triangle face index out of bounds (must be < 2)."),
        }
    }

    #[inline]
    fn num_half_edges(&self) -> u32 {
        6
    }

    #[inline]
    fn half_edge(&self, i: u32) -> &HalfEdgeEdge {
        assert!(i < 6, "Triangle half-edge index out of bounds (must be < 6).");
        &TRIANGLE_HALF_EDGES[i as usize]
    }

    #[inline]
    fn centroid(&self) -> Point<Real> {
        utils::center(&self.vertices)
    }
}
