use na::{Isometry3, Point3, Vector3};
use trishape3d::bounding_volume::BoundingVolume;
use trishape3d::shape::{ConvexPolyhedron, Shape, ShapeId, ShapeType, SupportMap, TriangleShape};

fn random_vector(rng: &mut oorandom::Rand32) -> Vector3<f32> {
    Vector3::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0)
}

fn random_triangle(rng: &mut oorandom::Rand32, id: u32) -> TriangleShape {
    loop {
        let vertices = [
            Point3::from(random_vector(rng) * 10.0),
            Point3::from(random_vector(rng) * 10.0),
            Point3::from(random_vector(rng) * 10.0),
        ];
        let normals = [random_vector(rng), random_vector(rng), random_vector(rng)];

        if let Ok(tri) = TriangleShape::new(vertices, normals, ShapeId(id)) {
            return tri;
        }
    }
}

#[test]
fn triangle_normals_and_centroid() {
    let mut rng = oorandom::Rand32::new(42);

    for i in 0..100 {
        let tri = random_triangle(&mut rng, i);
        let [a, b, c] = *tri.vertices();

        assert_eq!(*tri.face_normal(1), -*tri.face_normal(0));
        assert_relative_eq!(
            *tri.face_normal(0),
            (b - a).cross(&(c - a)).normalize(),
            epsilon = 1.0e-5
        );
        assert_relative_eq!(
            tri.centroid(),
            Point3::from((a.coords + b.coords + c.coords) / 3.0),
            epsilon = 1.0e-5
        );

        for n in tri.vertex_normals() {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn triangle_support_point_maximizes_dot_product() {
    let mut rng = oorandom::Rand32::new(0);

    for i in 0..100 {
        let tri = random_triangle(&mut rng, i);

        for _ in 0..20 {
            let dir = random_vector(&mut rng);
            let support = tri.local_support_point(&dir);
            let best = tri
                .vertices()
                .iter()
                .map(|v| v.coords.dot(&dir))
                .fold(f32::MIN, f32::max);

            assert!(tri.vertices().contains(&support));
            assert_eq!(support.coords.dot(&dir), best);

            let pos = Isometry3::new(random_vector(&mut rng), random_vector(&mut rng));
            let world_support = tri.support_point(&pos, &dir);
            let local_dir = pos.inverse_transform_vector(&dir);
            assert_relative_eq!(
                world_support,
                pos * tri.local_support_point(&local_dir),
                epsilon = 1.0e-5
            );
        }
    }
}

#[test]
fn triangle_bounds_are_exact_extrema() {
    let tri = TriangleShape::new(
        [
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-4.0, 5.0, 0.5),
            Point3::new(2.0, 1.0, -6.0),
        ],
        [Vector3::x(), Vector3::y(), Vector3::z()],
        ShapeId(3),
    )
    .unwrap()
    .with_margin(0.25);

    let (mins, maxs) = tri.local_bounds();
    assert_relative_eq!(mins + Vector3::repeat(0.25), Point3::new(-4.0, -2.0, -6.0));
    assert_relative_eq!(maxs - Vector3::repeat(0.25), Point3::new(2.0, 5.0, 3.0));

    let pos = Isometry3::translation(10.0, 0.0, 0.0);
    let aabb = tri.compute_aabb(&pos);
    assert_relative_eq!(aabb.mins, Point3::new(5.75, -2.25, -6.25));
    assert_relative_eq!(aabb.maxs, Point3::new(12.25, 5.25, 3.25));
    assert!(tri.compute_local_aabb().loosened(0.1).contains(&tri.compute_local_aabb()));
}

#[test]
fn triangle_never_contains_points() {
    let mut rng = oorandom::Rand32::new(7);
    let tri = random_triangle(&mut rng, 0);
    let [a, b, c] = *tri.vertices();

    for _ in 0..100 {
        let [u, v] = [rng.rand_float(), rng.rand_float()];
        let (u, v) = if u + v > 1.0 { (1.0 - u, 1.0 - v) } else { (u, v) };
        let on_plane = a + (b - a) * u + (c - a) * v;

        assert!(!tri.contains_local_point(&on_plane));
        assert!(!tri.contains_local_point(&Point3::from(random_vector(&mut rng))));
    }
}

#[test]
fn barycentric_coordinates_round_trip() {
    let mut rng = oorandom::Rand32::new(1234);
    let tri = TriangleShape::new(
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 1.0),
            Point3::new(0.0, 2.0, -1.0),
        ],
        [Vector3::z(); 3],
        ShapeId(0),
    )
    .unwrap();
    let [a, b, c] = *tri.vertices();

    for _ in 0..100 {
        let [u, v, w] = [rng.rand_float(), rng.rand_float(), rng.rand_float()];
        let sum = u + v + w;
        let expected = [u / sum, v / sum, w / sum];
        let pt = Point3::from(a.coords * expected[0] + b.coords * expected[1] + c.coords * expected[2]);
        let bcoords = tri.barycentric_coordinates(&pt);

        for k in 0..3 {
            assert_relative_eq!(bcoords[k], expected[k], epsilon = 1.0e-4);
        }
    }
}

#[test]
fn triangle_behind_dyn_shape() {
    let tri = TriangleShape::new(
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        [Vector3::z(); 3],
        ShapeId(11),
    )
    .unwrap();
    let shape: &dyn Shape = &tri;

    assert_eq!(shape.shape_type(), ShapeType::Triangle);
    assert!(shape.size_in_bytes() >= std::mem::size_of::<TriangleShape>());
    assert_eq!(shape.as_triangle_shape().map(|t| t.id()), Some(ShapeId(11)));
    assert!(shape.as_shape::<TriangleShape>().is_some());
    assert!(shape.as_cuboid().is_none());

    let poly = shape.as_convex_polyhedron().unwrap();
    assert_eq!(poly.num_faces(), 2);
    assert_eq!(poly.num_vertices(), 3);
    assert_eq!(poly.num_half_edges(), 6);
    assert_eq!(poly.support_face(&Vector3::new(0.1, 0.0, 1.0)), 0);
    assert_eq!(poly.support_face(&-Vector3::z()), 1);
    assert_eq!(
        poly.half_edge_endpoints(0),
        (Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0))
    );
    assert_eq!(
        poly.half_edge_endpoints(3),
        (Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 0.0, 0.0))
    );
}
