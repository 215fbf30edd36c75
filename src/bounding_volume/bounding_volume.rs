use crate::math::{Point, Real};

/// Trait of bounding volumes maintained by the broad phase.
///
/// Bounding volumes are coarse approximations of shapes, used to quickly discard pairs of
/// shapes that cannot possibly touch before running any exact geometric query.
pub trait BoundingVolume {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersects another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;

    /// Enlarges this bounding volume by the given margin.
    fn loosened(&self, _: Real) -> Self;
}
