use na::{Isometry3, Point3, Vector3};
use trishape3d::query::{Ray, RayCast};
use trishape3d::shape::{FeatureId, ShapeId, TriangleRaycastSide, TriangleShape};

fn unit_right_triangle(side: TriangleRaycastSide) -> TriangleShape {
    let mut tri = TriangleShape::new(
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        [Vector3::z(); 3],
        ShapeId(0),
    )
    .unwrap();
    tri.set_raycast_side(side);
    tri
}

#[test]
fn ray_hits_front_face() {
    let tri = unit_right_triangle(TriangleRaycastSide::FrontAndBack);
    let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), -Vector3::z());
    let inter = tri
        .cast_local_ray_and_get_normal(&ray, 10.0, true)
        .unwrap();

    assert_relative_eq!(inter.time_of_impact, 1.0);
    assert_relative_eq!(inter.point, Point3::new(0.2, 0.2, 0.0));
    assert_relative_eq!(inter.normal, Vector3::z());
    assert_eq!(inter.feature, FeatureId::Face(0));
}

#[test]
fn ray_outside_triangle_misses() {
    let tri = unit_right_triangle(TriangleRaycastSide::FrontAndBack);
    let ray = Ray::new(Point3::new(2.0, 2.0, 1.0), -Vector3::z());
    assert!(tri.cast_local_ray_and_get_normal(&ray, 10.0, true).is_none());
}

#[test]
fn raycast_sides_filter_hits() {
    let from_front = Ray::new(Point3::new(0.2, 0.2, 1.0), -Vector3::z());
    let from_behind = Ray::new(Point3::new(0.2, 0.2, -1.0), Vector3::z());

    let front = unit_right_triangle(TriangleRaycastSide::Front);
    assert!(front.intersects_local_ray(&from_front, 10.0));
    assert!(!front.intersects_local_ray(&from_behind, 10.0));

    let back = unit_right_triangle(TriangleRaycastSide::Back);
    assert!(!back.intersects_local_ray(&from_front, 10.0));
    let inter = back
        .cast_local_ray_and_get_normal(&from_behind, 10.0, true)
        .unwrap();
    assert_relative_eq!(inter.normal, -Vector3::z());
    assert_eq!(inter.feature, FeatureId::Face(1));

    let both = unit_right_triangle(TriangleRaycastSide::FrontAndBack);
    let inter = both
        .cast_local_ray_and_get_normal(&from_behind, 10.0, false)
        .unwrap();
    // The normal faces the ray.
    assert_relative_eq!(inter.normal, -Vector3::z());
    assert_eq!(inter.feature, FeatureId::Face(1));
}

#[test]
fn ray_hits_on_edges_and_vertices() {
    let tri = unit_right_triangle(TriangleRaycastSide::FrontAndBack);

    for origin in [
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.5, 0.5, 1.0),
        Point3::new(0.5, 0.0, 1.0),
    ] {
        let ray = Ray::new(origin, -Vector3::z());
        assert_eq!(tri.cast_local_ray(&ray, 10.0, true), Some(1.0));
    }
}

#[test]
fn ray_cast_in_world_space() {
    let tri = unit_right_triangle(TriangleRaycastSide::FrontAndBack);
    let pos = Isometry3::new(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::x() * std::f32::consts::FRAC_PI_2,
    );

    // The local point (0.2, 0.2, 0) ends up at (1.2, 2.0, 3.2) and the front face normal
    // becomes (0, -1, 0), so this ray hits the back face.
    let ray = Ray::new(Point3::new(1.2, 5.0, 3.2), -Vector3::y());
    let inter = tri
        .cast_ray_and_get_normal(&pos, &ray, 10.0, true)
        .unwrap();

    assert_relative_eq!(inter.time_of_impact, 3.0, epsilon = 1.0e-5);
    assert_relative_eq!(inter.point, Point3::new(1.2, 2.0, 3.2), epsilon = 1.0e-5);
    assert_relative_eq!(inter.normal, Vector3::y(), epsilon = 1.0e-5);
    assert!(tri.intersects_ray(&pos, &ray, 10.0));
    assert!(!tri.intersects_ray(&pos, &ray, 2.5));
}

#[test]
fn random_rays_through_the_triangle_hit_it() {
    let mut rng = oorandom::Rand32::new(42);
    let tri = unit_right_triangle(TriangleRaycastSide::FrontAndBack);

    for _ in 0..1000 {
        let (u, v) = (rng.rand_float() * 0.9 + 0.05, rng.rand_float() * 0.9 + 0.05);
        let (u, v) = if u + v > 1.0 { (1.0 - u, 1.0 - v) } else { (u, v) };
        let target = Point3::new(u, v, 0.0);
        let origin = target
            + Vector3::new(
                rng.rand_float() - 0.5,
                rng.rand_float() - 0.5,
                rng.rand_float() + 0.5,
            ) * 4.0;
        let ray = Ray::new(origin, target - origin);

        let inter = tri
            .cast_local_ray_and_get_normal(&ray, 2.0, true)
            .unwrap_or_else(|| panic!("Ray {ray:?} did not hit the triangle"));

        assert_relative_eq!(inter.time_of_impact, 1.0, epsilon = 1.0e-4);
        assert_relative_eq!(inter.point, target, epsilon = 1.0e-4);
        assert_eq!(inter.normal, Vector3::z());
    }
}
