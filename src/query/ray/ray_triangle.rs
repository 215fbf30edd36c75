use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{FeatureId, TriangleRaycastSide, TriangleShape};
use crate::utils::{self, BARYCENTRIC_TOLERANCE};

impl RayCast for TriangleShape {
    /// The `solid` flag is ignored: a triangle has no interior.
    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        _: bool,
    ) -> Option<RayIntersection> {
        local_ray_intersection_with_triangle(
            self.vertices(),
            &self.normal(),
            self.raycast_side(),
            ray,
            max_time_of_impact,
        )
        .map(|(inter, _)| inter)
    }
}

/// Computes the intersection between a triangle and a ray.
///
/// `normal` must be the unit normal of the front face of the triangle, i.e., the
/// normalized `(b - a) × (c - a)`. Only the faces allowed by `side` can be hit. The normal of
/// the returned intersection is `normal` for a front-face hit and `-normal` for a back-face
/// hit; its feature is `Face(0)` for the front face and `Face(1)` for the back face.
///
/// If an intersection is found, it is returned together with the barycentric coordinates of
/// the hit point.
pub fn local_ray_intersection_with_triangle(
    vertices: &[Point<Real>; 3],
    normal: &UnitVector<Real>,
    side: TriangleRaycastSide,
    ray: &Ray,
    max_time_of_impact: Real,
) -> Option<(RayIntersection, [Real; 3])> {
    let [a, b, c] = vertices;
    let denom = normal.dot(&ray.dir);

    // The ray is parallel to the triangle plane.
    if denom.abs() < DEFAULT_EPSILON {
        return None;
    }

    let front_hit = denom < 0.0;

    match side {
        TriangleRaycastSide::Front if !front_hit => return None,
        TriangleRaycastSide::Back if front_hit => return None,
        _ => {}
    }

    let toi = normal.dot(&(a - ray.origin)) / denom;

    if toi < 0.0 || toi > max_time_of_impact {
        return None;
    }

    let point = ray.point_at(toi);
    let bcoords = utils::triangle_barycentric_coordinates(a, b, c, &point)?;

    if bcoords
        .iter()
        .any(|w| *w < -BARYCENTRIC_TOLERANCE || *w > 1.0 + BARYCENTRIC_TOLERANCE)
    {
        return None;
    }

    let (hit_normal, fid) = if front_hit {
        (**normal, 0)
    } else {
        (-**normal, 1)
    };

    Some((
        RayIntersection::new(toi, point, hit_normal, FeatureId::Face(fid)),
        bcoords,
    ))
}
