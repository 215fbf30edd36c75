use crate::math::{Point, Real};

/// Computes the barycentric coordinates of `p` with respect to the triangle `(a, b, c)`.
///
/// The point is implicitly projected on the plane of the triangle. The returned coordinates
/// `[u, v, w]` satisfy `u + v + w == 1` and `u * a + v * b + w * c == proj(p)`.
///
/// The coordinates are ratios of signed areas measured along the triangle normal, which stay
/// accurate on thin triangles.
///
/// Returns `None` if the triangle is degenerate (its three vertices are collinear).
pub fn triangle_barycentric_coordinates(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p: &Point<Real>,
) -> Option<[Real; 3]> {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let n = ab.cross(&ac);
    let nn = n.norm_squared();

    if nn == 0.0 || !nn.is_finite() {
        return None;
    }

    let v = ap.cross(&ac).dot(&n) / nn;
    let w = ab.cross(&ap).dot(&n) / nn;

    Some([1.0 - v - w, v, w])
}

/// Clamps barycentric coordinates to the unit simplex.
///
/// Negative coordinates (typically caused by numerical drift on points lying on, or very
/// close to, an edge) are set to zero and the result is rescaled to sum to one.
pub fn clamp_to_simplex(bcoords: [Real; 3]) -> [Real; 3] {
    let clamped = bcoords.map(|x| x.max(0.0));
    let sum = clamped[0] + clamped[1] + clamped[2];

    if sum > 0.0 {
        clamped.map(|x| x / sum)
    } else {
        // Only reachable with non-finite inputs.
        [1.0 / 3.0; 3]
    }
}
