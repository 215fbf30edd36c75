//! Contact post-processing for triangle-backed shapes.

pub use self::mesh_contact::{ContactSide, MeshContact};
pub use self::smooth_mesh_contact::{smooth_triangle_mesh_contact, SmoothingError};

mod mesh_contact;
mod smooth_mesh_contact;
