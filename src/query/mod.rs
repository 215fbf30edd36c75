//! Non-persistent geometric queries.
//!
//! Ray-casting is achieved by importing the [`RayCast`] trait. Contacts generated against
//! mesh triangles can be post-processed with [`smooth_triangle_mesh_contact`] to use the
//! smooth normals of the mesh.

pub use self::contact::{
    smooth_triangle_mesh_contact, ContactSide, MeshContact, SmoothingError,
};
pub use self::ray::{local_ray_intersection_with_triangle, Ray, RayCast, RayIntersection};

pub mod contact;
mod ray;
