use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Matrix, Point, Real};
use crate::query::RayCast;
use crate::shape::{ConvexPolyhedron, Cuboid, TriangleShape};
use core::mem::size_of_val;
use downcast_rs::{impl_downcast, DowncastSync};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A triangle of a triangle mesh or of a heightfield.
    Triangle = 0,
    /// A cuboid shape.
    Cuboid,
    /// A custom user-defined shape.
    Custom,
}

/// Trait implemented by all collision shapes.
///
/// Shapes are immutable once built and are `Send + Sync`: they can be queried from several
/// narrow-phase threads at the same time without synchronization.
pub trait Shape: RayCast + DowncastSync {
    /// The type of this shape.
    fn shape_type(&self) -> ShapeType;

    /// The margin inflating this shape, applied uniformly to its bounds and support points.
    fn margin(&self) -> Real;

    /// Computes the Aabb of this shape, in its local-space, enlarged by its margin.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes the Aabb of this shape with the given position, enlarged by its margin.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_local_aabb().transform_by(position)
    }

    /// Tests if a point expressed in the local-space of this shape lies inside of it.
    fn contains_local_point(&self, pt: &Point<Real>) -> bool;

    /// Tests if a point lies inside of this shape transformed by `m`.
    fn contains_point(&self, m: &Isometry<Real>, pt: &Point<Real>) -> bool {
        self.contains_local_point(&m.inverse_transform_point(pt))
    }

    /// The local-space inertia tensor of this shape for the given mass.
    fn local_inertia_tensor(&self, mass: Real) -> Matrix<Real>;

    /// The number of bytes used by this shape, for memory accounting.
    fn size_in_bytes(&self) -> usize {
        size_of_val(self)
    }

    /// Converts this shape into its convex polyhedron capability, if it has one.
    fn as_convex_polyhedron(&self) -> Option<&dyn ConvexPolyhedron> {
        None
    }

    /// Converts this shape into a mesh triangle, if it is triangle-backed.
    fn as_triangle_shape(&self) -> Option<&TriangleShape> {
        None
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }
}
