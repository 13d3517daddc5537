//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 matrix stored in the upper left of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a 3x3 transform. Each row holds the contribution of one input
/// component to the three outputs, i.e. the transpose of the usual notation.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        let m = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(
            transform(&m, Components(0.1, 0.2, 0.3)),
            Components(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn rows_are_inputs() {
        #[rustfmt::skip]
        let m = transform_3x3(
            1.0, 2.0, 3.0,
            0.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        assert_eq!(
            transform(&m, Components(1.0, 5.0, 2.0)),
            Components(1.0, 2.0, 5.0)
        );
    }
}
