use core::mem;

use crate::math::{Real, Vector, DIM};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{Cuboid, FeatureId};
use num::Zero;

impl RayCast for Cuboid {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let (near, far) = clip_line_with_cuboid(&self.half_extents, ray)?;

        let (toi, face) = if near.0 < 0.0 {
            if solid {
                return Some(RayIntersection::new(
                    0.0,
                    ray.origin,
                    Vector::zeros(),
                    FeatureId::Unknown,
                ));
            }

            far
        } else {
            near
        };

        if toi < 0.0 || toi > max_time_of_impact {
            return None;
        }

        let mut normal = Vector::zeros();
        normal[face as usize / 2] = if face % 2 == 0 { 1.0 } else { -1.0 };

        Some(RayIntersection::new(
            toi,
            ray.point_at(toi),
            normal,
            FeatureId::Face(face),
        ))
    }
}

/// Intersects the line supporting `ray` with the cuboid of the given half-extents.
///
/// Returns the parameters of the entry and exit points of the line, each with the index of
/// the cuboid face crossed there.
fn clip_line_with_cuboid(
    half_extents: &Vector<Real>,
    ray: &Ray,
) -> Option<((Real, u32), (Real, u32))> {
    let mut near = (-Real::MAX, 0);
    let mut far = (Real::MAX, 0);

    for i in 0..DIM {
        if ray.dir[i].is_zero() {
            if ray.origin[i].abs() > half_extents[i] {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            // Face `2i` is on the positive side of the axis, face `2i + 1` on the negative side.
            let mut near_i = ((-half_extents[i] - ray.origin[i]) * denom, 2 * i as u32 + 1);
            let mut far_i = ((half_extents[i] - ray.origin[i]) * denom, 2 * i as u32);

            if near_i.0 > far_i.0 {
                mem::swap(&mut near_i, &mut far_i);
            }

            if near_i.0 > near.0 {
                near = near_i;
            }

            if far_i.0 < far.0 {
                far = far_i;
            }

            if near.0 > far.0 || far.0 < 0.0 {
                return None;
            }
        }
    }

    Some((near, far))
}
