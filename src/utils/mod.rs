//! Various unsorted geometrical and logical operators.

pub use self::barycentric::{clamp_to_simplex, triangle_barycentric_coordinates};
pub use self::center::center;
pub use self::consts::*;

mod barycentric;
mod center;
mod consts;
