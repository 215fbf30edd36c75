use crate::math::Real;

/// Tolerance on each barycentric coordinate when deciding whether a point lies on a triangle.
///
/// Lets a ray hitting exactly the shared edge of two adjacent triangles register on both
/// instead of slipping through the seam.
pub const BARYCENTRIC_TOLERANCE: Real = 1.0e-5;

/// Norm under which an interpolated normal is considered degenerate.
pub const DEGENERATE_NORMAL_EPSILON: Real = crate::math::DEFAULT_EPSILON * 100.0;
