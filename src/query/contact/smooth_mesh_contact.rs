use crate::math::{Isometry, Point, Real, UnitVector};
use crate::query::contact::{ContactSide, MeshContact};
use crate::shape::{Shape, TriangleShape};

/// Error raised when a mesh contact cannot be smoothed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SmoothingError {
    /// The shape designated as the mesh triangle is not triangle-backed.
    #[error("the {0:?} shape of the contact is not a mesh triangle.")]
    NotTriangleBacked(ContactSide),
}

/// Replaces the normal of a contact against a mesh triangle by the smooth mesh normal.
///
/// Contacts generated against the flat faces of a triangle mesh produce normals that jump
/// abruptly when a shape slides across an internal edge. This computes the normal
/// interpolated from the mesh vertex normals at the contact point instead, then moves the
/// contact point of the other shape so that both points stay `contact.depth` apart along the
/// new normal.
///
/// `triangle_side` tells which of `shape1` or `shape2` is the mesh triangle. The contact point
/// on the triangle is kept as-is. The returned normal still points from `shape1` toward
/// `shape2`.
///
/// Fails with [`SmoothingError::NotTriangleBacked`] if the designated shape is not a
/// [`TriangleShape`].
pub fn smooth_triangle_mesh_contact(
    pos1: &Isometry<Real>,
    shape1: &dyn Shape,
    pos2: &Isometry<Real>,
    shape2: &dyn Shape,
    triangle_side: ContactSide,
    contact: &MeshContact,
) -> Result<MeshContact, SmoothingError> {
    let (triangle, triangle_pos, other, other_pos) = match triangle_side {
        ContactSide::First => (shape1, pos1, shape2, pos2),
        ContactSide::Second => (shape2, pos2, shape1, pos1),
    };

    let triangle = triangle
        .as_triangle_shape()
        .ok_or(SmoothingError::NotTriangleBacked(triangle_side))?;

    log::trace!(
        "Smoothing contact between triangle {:?} and a {:?} shape.",
        triangle.id(),
        other.shape_type()
    );

    // Penetration axis oriented from the triangle toward the other shape.
    let triangle_to_other = match triangle_side {
        ContactSide::First => contact.normal,
        ContactSide::Second => -contact.normal,
    };

    let (other_local_pt, smooth_normal) = smooth_mesh_contact_with_triangle(
        triangle,
        triangle_pos,
        other_pos,
        &contact.local_point(triangle_side),
        &triangle_to_other,
        contact.depth,
    );

    let result = match triangle_side {
        ContactSide::First => MeshContact::new(
            contact.local_p1,
            other_local_pt,
            smooth_normal,
            contact.depth,
        ),
        ContactSide::Second => MeshContact::new(
            other_local_pt,
            contact.local_p2,
            -smooth_normal,
            contact.depth,
        ),
    };

    Ok(result)
}

/// Computes the smooth world-space normal at `local_pt` on `triangle`, oriented toward the
/// other shape, and the matching contact point in the local-space of the other shape.
fn smooth_mesh_contact_with_triangle(
    triangle: &TriangleShape,
    triangle_pos: &Isometry<Real>,
    other_pos: &Isometry<Real>,
    local_pt: &Point<Real>,
    triangle_to_other: &UnitVector<Real>,
    depth: Real,
) -> (Point<Real>, UnitVector<Real>) {
    let mut local_normal = triangle.smooth_local_contact_normal(local_pt);
    let mut world_normal = triangle_pos.rotation * local_normal;

    if world_normal.dot(triangle_to_other.as_ref()) < 0.0 {
        local_normal = -local_normal;
        world_normal = -world_normal;
    }

    let other_pt_in_triangle = local_pt - *local_normal * depth;
    let other_local_pt = other_pos.inverse_transform_point(&(triangle_pos * other_pt_in_triangle));

    (other_local_pt, world_normal)
}
