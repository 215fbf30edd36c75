use crate::math::{Point, Real, UnitVector};
use core::mem;

/// Identifies one of the two shapes involved in a contact.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// The first shape of the pair.
    First,
    /// The second shape of the pair.
    Second,
}

impl ContactSide {
    /// The other side of the pair.
    #[inline]
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            ContactSide::First => ContactSide::Second,
            ContactSide::Second => ContactSide::First,
        }
    }
}

/// Geometric description of a penetrating contact produced by the narrow phase.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshContact {
    /// Position of the contact on the first shape, expressed in its local-space.
    pub local_p1: Point<Real>,

    /// Position of the contact on the second shape, expressed in its local-space.
    pub local_p2: Point<Real>,

    /// Contact normal, in world-space, pointing from the first shape toward the second shape.
    pub normal: UnitVector<Real>,

    /// Penetration depth along `normal`.
    pub depth: Real,
}

impl MeshContact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        local_p1: Point<Real>,
        local_p2: Point<Real>,
        normal: UnitVector<Real>,
        depth: Real,
    ) -> Self {
        MeshContact {
            local_p1,
            local_p2,
            normal,
            depth,
        }
    }

    /// The contact point on the given shape, in its local-space.
    #[inline]
    pub fn local_point(&self, side: ContactSide) -> Point<Real> {
        match side {
            ContactSide::First => self.local_p1,
            ContactSide::Second => self.local_p2,
        }
    }

    /// Swaps the points of this contact and reverses its normal.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.local_p1, &mut self.local_p2);
        self.normal = -self.normal;
    }

    /// Returns a new contact containing the swapped points and the reversed normal of `self`.
    #[inline]
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
