//! Shapes supported by trishape3d.

pub use self::convex_polyhedron::{check_half_edge_invariants, ConvexPolyhedron};
pub use self::cuboid::Cuboid;
pub use self::feature_id::FeatureId;
pub use self::half_edge::{
    HalfEdgeEdge, HalfEdgeFace, HalfEdgeStructure, HalfEdgeVertex, TopologyError,
};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle_shape::{ShapeId, TriangleRaycastSide, TriangleShape, TriangleShapeError};

mod convex_polyhedron;
mod cuboid;
mod feature_id;
mod half_edge;
#[doc(hidden)]
pub mod shape;
#[doc(hidden)]
pub mod support_map;
mod triangle_shape;
