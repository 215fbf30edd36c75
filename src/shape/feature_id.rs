/// An identifier of a feature of a convex polyhedron.
///
/// Face indices are those of the polyhedron's half-edge structure, so a feature id can be
/// resolved through [`ConvexPolyhedron::face`](crate::shape::ConvexPolyhedron::face).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum FeatureId {
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier.
    Unknown,
}
