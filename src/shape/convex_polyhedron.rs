use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{HalfEdgeEdge, HalfEdgeFace, HalfEdgeVertex, Shape, SupportMap, TopologyError};

/// Capability of convex shapes whose boundary is described by a half-edge structure.
///
/// This is the interface the narrow phase (support mapping, SAT, face clipping) is written
/// against. It never needs to know the concrete shape behind it.
///
/// All the accessors taking an index panic if that index is out of bounds, i.e., not smaller
/// than the corresponding `num_*` count.
pub trait ConvexPolyhedron: Shape + SupportMap {
    /// The number of faces of this polyhedron.
    fn num_faces(&self) -> u32;

    /// The `i`-th face of this polyhedron.
    fn face(&self, i: u32) -> &HalfEdgeFace;

    /// The number of vertices of this polyhedron.
    fn num_vertices(&self) -> u32;

    /// The half-edge record of the `i`-th vertex.
    fn vertex(&self, i: u32) -> HalfEdgeVertex;

    /// The local-space position of the `i`-th vertex.
    fn vertex_position(&self, i: u32) -> Point<Real>;

    /// The outward unit normal of the `i`-th face.
    fn face_normal(&self, i: u32) -> UnitVector<Real>;

    /// The number of half-edges of this polyhedron.
    fn num_half_edges(&self) -> u32;

    /// The `i`-th half-edge of this polyhedron.
    fn half_edge(&self, i: u32) -> &HalfEdgeEdge;

    /// The geometric center of this polyhedron.
    ///
    /// Used as a reference point for orienting separating axes.
    fn centroid(&self) -> Point<Real>;

    /// The support point of this polyhedron inflated by its margin.
    ///
    /// The margin-free support point is pushed by `margin` along `dir`. If `dir` is too small
    /// to be normalized, the point is pushed along `-Y` instead.
    fn local_support_point_with_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let pt = self.local_support_point(dir);
        let margin = self.margin();

        if margin != 0.0 {
            let unit_dir = UnitVector::try_new(*dir, DEFAULT_EPSILON)
                .unwrap_or_else(|| -Vector::y_axis());
            pt + *unit_dir * margin
        } else {
            pt
        }
    }

    /// The support point of this polyhedron, inflated by its margin and transformed by `m`.
    fn support_point_with_margin(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = m.inverse_transform_vector(dir);
        m * self.local_support_point_with_margin(&local_dir)
    }

    /// The index of the face whose normal has the largest dot product with `dir`.
    ///
    /// Ties are resolved in favor of the face with the smallest index.
    fn support_face(&self, dir: &Vector<Real>) -> u32 {
        let mut best = 0;
        let mut best_dot = -Real::MAX;

        for i in 0..self.num_faces() {
            let dot = self.face_normal(i).dot(dir);

            if dot > best_dot {
                best = i;
                best_dot = dot;
            }
        }

        best
    }

    /// The positions of the origin and of the destination of the `i`-th half-edge.
    fn half_edge_endpoints(&self, i: u32) -> (Point<Real>, Point<Real>) {
        let edge = self.half_edge(i);
        let twin = self.half_edge(edge.twin_edge);
        (
            self.vertex_position(edge.vertex),
            self.vertex_position(twin.vertex),
        )
    }
}

/// Checks that the half-edge structure exposed by `poly` is consistent.
///
/// Verifies that twins are paired and point the other way, that each face is bounded by a
/// closed cycle of half-edges following its vertex list, and that each vertex record points
/// to a half-edge originating from that vertex.
pub fn check_half_edge_invariants<P>(poly: &P) -> Result<(), TopologyError>
where
    P: ?Sized + ConvexPolyhedron,
{
    for i in 0..poly.num_half_edges() {
        let edge = poly.half_edge(i);

        if edge.twin_edge == i
            || edge.twin_edge >= poly.num_half_edges()
            || edge.next_edge >= poly.num_half_edges()
            || edge.face >= poly.num_faces()
            || edge.vertex >= poly.num_vertices()
        {
            return Err(TopologyError::InconsistentHalfEdge(i));
        }

        let twin = poly.half_edge(edge.twin_edge);
        let next = poly.half_edge(edge.next_edge);

        if twin.twin_edge != i || twin.vertex != next.vertex || next.face != edge.face {
            return Err(TopologyError::InconsistentHalfEdge(i));
        }
    }

    for f in 0..poly.num_faces() {
        let face = poly.face(f);

        if face.vertices.len() < 3 {
            return Err(TopologyError::DegenerateFace(f));
        }

        if face.edge_index >= poly.num_half_edges() {
            return Err(TopologyError::InconsistentHalfEdge(face.edge_index));
        }

        let mut eid = face.edge_index;

        for &v in &face.vertices {
            let edge = poly.half_edge(eid);

            if edge.vertex != v || edge.face != f {
                return Err(TopologyError::InconsistentHalfEdge(eid));
            }

            eid = edge.next_edge;
        }

        if eid != face.edge_index {
            return Err(TopologyError::InconsistentHalfEdge(eid));
        }
    }

    for v in 0..poly.num_vertices() {
        let vertex = poly.vertex(v);

        if vertex.vertex_index != v
            || vertex.edge_index >= poly.num_half_edges()
            || poly.half_edge(vertex.edge_index).vertex != v
        {
            return Err(TopologyError::InconsistentHalfEdge(vertex.edge_index));
        }
    }

    Ok(())
}
