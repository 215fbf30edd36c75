use na::{Point3, Vector3};
use trishape3d::shape::{
    check_half_edge_invariants, ConvexPolyhedron, Cuboid, HalfEdgeStructure, Shape, ShapeType,
    SupportMap, TopologyError,
};

#[test]
fn cuboid_half_edges_are_consistent() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(check_half_edge_invariants(&cuboid), Ok(()));

    let shape: &dyn Shape = &cuboid;
    assert_eq!(shape.shape_type(), ShapeType::Cuboid);
    assert!(shape.as_triangle_shape().is_none());

    let poly = shape.as_convex_polyhedron().unwrap();
    assert_eq!(check_half_edge_invariants(poly), Ok(()));

    for e in 0..poly.num_half_edges() {
        let (a, b) = poly.half_edge_endpoints(e);
        let edge = poly.half_edge(e);
        let twin = poly.half_edge(edge.twin_edge);

        // Every cuboid edge is parallel to one of the axes.
        assert_eq!((b - a).iter().filter(|x| **x != 0.0).count(), 1);
        assert_eq!(poly.half_edge_endpoints(edge.twin_edge), (b, a));
        assert_ne!(edge.face, twin.face);
    }
}

#[test]
fn cuboid_support_point_and_face() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 2.0, 3.0)).with_margin(0.5);

    assert_eq!(
        cuboid.local_support_point(&Vector3::new(1.0, -1.0, 0.5)),
        Point3::new(1.0, -2.0, 3.0)
    );
    assert_relative_eq!(
        cuboid.local_support_point_with_margin(&Vector3::new(0.0, 0.0, -2.0)),
        Point3::new(1.0, 2.0, -3.5)
    );

    assert_eq!(cuboid.support_face(&Vector3::new(0.1, 0.2, -0.9)), 5);
    assert_eq!(cuboid.support_face(&Vector3::new(-0.9, 0.2, 0.1)), 1);
    // Ties are resolved in favor of the first face.
    assert_eq!(cuboid.support_face(&Vector3::new(1.0, 1.0, 0.0)), 0);

    let aabb = cuboid.compute_local_aabb();
    assert_relative_eq!(aabb.maxs, Point3::new(1.5, 2.5, 3.5));
    assert_relative_eq!(aabb.mins, Point3::new(-1.5, -2.5, -3.5));
}

#[test]
fn from_faces_rejects_open_meshes() {
    // A cube without its top face.
    let faces = [
        [1, 3, 7, 5],
        [0, 4, 6, 2],
        [2, 6, 7, 3],
        [0, 1, 5, 4],
        [0, 2, 3, 1],
    ];

    // The first face's edge 7 -> 5 is the first one whose twin belonged to the top face.
    assert_eq!(
        HalfEdgeStructure::from_faces(8, &faces),
        Err(TopologyError::MissingTwin { edge: (7, 5) })
    );
}
