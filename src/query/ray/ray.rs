//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::FeatureId;

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at `origin` and extending along `dir`. The
/// direction does not need to be normalized: times of impact are expressed in multiples of
/// `dir.norm()`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use trishape3d::math::{Point, Vector};
/// use trishape3d::query::Ray;
///
/// let ray = Ray::new(Point::new(0.0, 5.0, 0.0), Vector::x());
/// assert_eq!(ray.point_at(2.0), Point::new(2.0, 5.0, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Transforms this ray by the given isometry.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    ///
    /// This expresses a world-space ray in the local-space of a shape positioned at `m`.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Computes the point at the given parameter on this line.
    ///
    /// This computes `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Result of a successful ray cast against a shape.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact of the ray with the object.
    ///
    /// The hit point is `ray.point_at(time_of_impact)`.
    pub time_of_impact: Real,

    /// The hit point.
    pub point: Point<Real>,

    /// The unit normal at the hit point.
    ///
    /// Its orientation depends on the shape: a two-sided triangle returns the normal facing
    /// the ray, a solid shape returns the outward normal. It is zero if the ray starts inside
    /// of a solid shape.
    pub normal: Vector<Real>,

    /// Feature at the intersection point.
    pub feature: FeatureId,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(
        time_of_impact: Real,
        point: Point<Real>,
        normal: Vector<Real>,
        feature: FeatureId,
    ) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            point,
            normal,
            feature,
        }
    }

    /// Transforms the hit point and the normal of this intersection by `transform`.
    #[inline]
    pub fn transform_by(&self, transform: &Isometry<Real>) -> Self {
        RayIntersection {
            time_of_impact: self.time_of_impact,
            point: transform * self.point,
            normal: transform * self.normal,
            feature: self.feature,
        }
    }
}

/// Traits of objects which can be transformed and tested for intersection with a ray.
///
/// The `solid` flag only matters for rays starting inside a shape with an interior: a solid
/// shape is hit at time `0`, while a hollow one is hit where the ray exits it.
pub trait RayCast {
    /// Computes the time of impact between this shape and a ray.
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real, solid: bool) -> Option<Real> {
        self.cast_local_ray_and_get_normal(ray, max_time_of_impact, solid)
            .map(|inter| inter.time_of_impact)
    }

    /// Computes the time of impact, hit point, and normal between this shape and a ray.
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection>;

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_local_ray(ray, max_time_of_impact, true).is_some()
    }

    /// Computes the time of impact between this transformed shape and a ray.
    fn cast_ray(
        &self,
        m: &Isometry<Real>,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<Real> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray(&ls_ray, max_time_of_impact, solid)
    }

    /// Computes the time of impact, hit point, and normal between this transformed shape and
    /// a ray.
    ///
    /// The hit point and the normal are expressed in world-space.
    fn cast_ray_and_get_normal(
        &self,
        m: &Isometry<Real>,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray_and_get_normal(&ls_ray, max_time_of_impact, solid)
            .map(|inter| inter.transform_by(m))
    }

    /// Tests whether a ray intersects this transformed shape.
    #[inline]
    fn intersects_ray(&self, m: &Isometry<Real>, ray: &Ray, max_time_of_impact: Real) -> bool {
        let ls_ray = ray.inverse_transform_by(m);
        self.intersects_local_ray(&ls_ray, max_time_of_impact)
    }
}
