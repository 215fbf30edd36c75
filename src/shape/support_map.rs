//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// The support point of a shape in a direction `d` is a point of the shape maximizing its dot
/// product with `d`. Support points returned by this trait ignore the shape's margin; see
/// [`ConvexPolyhedron::local_support_point_with_margin`](crate::shape::ConvexPolyhedron::local_support_point_with_margin)
/// for the inflated version.
pub trait SupportMap {
    /// Evaluates the support function of this shape, in its local-space.
    ///
    /// `dir` does not need to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
