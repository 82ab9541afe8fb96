// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Closed-form 3x3 linear algebra
//!
//! nalgebra covers the vector arithmetic; the inversion chain is spelled out
//! here because singularity must surface as an explicit error rather than an
//! `Option` or a NaN-filled matrix.

use crate::error::GeometryError;
use nalgebra::Matrix3;

/// Determinant by cofactor expansion along the first row
pub fn determinant(m: &Matrix3<f64>) -> f64 {
    m.m11 * (m.m22 * m.m33 - m.m23 * m.m32) - m.m12 * (m.m21 * m.m33 - m.m23 * m.m31)
        + m.m13 * (m.m21 * m.m32 - m.m22 * m.m31)
}

/// Adjugate: the transpose of the cofactor matrix
pub fn adjugate(m: &Matrix3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        m.m22 * m.m33 - m.m23 * m.m32,
        -(m.m12 * m.m33 - m.m13 * m.m32),
        m.m12 * m.m23 - m.m13 * m.m22,
        -(m.m21 * m.m33 - m.m23 * m.m31),
        m.m11 * m.m33 - m.m13 * m.m31,
        -(m.m11 * m.m23 - m.m13 * m.m21),
        m.m21 * m.m32 - m.m22 * m.m31,
        -(m.m11 * m.m32 - m.m12 * m.m31),
        m.m11 * m.m22 - m.m12 * m.m21,
    )
}

/// Inverse via `adjugate / determinant`
///
/// Fails with [`GeometryError::SingularMatrix`] when the determinant is
/// exactly zero. There is no epsilon here: near-singular matrices invert to
/// large but finite entries, which downstream consumers can still use.
pub fn inverse(m: &Matrix3<f64>) -> Result<Matrix3<f64>, GeometryError> {
    let det = determinant(m);
    if det == 0.0 {
        return Err(GeometryError::SingularMatrix);
    }
    Ok(adjugate(m) / det)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn sample() -> Matrix3<f64> {
        Matrix3::from_columns(&[
            Vector3::new(1.0, 0.0, 5.0),
            Vector3::new(2.0, 1.0, 6.0),
            Vector3::new(3.0, 4.0, 0.0),
        ])
    }

    #[test]
    fn test_determinant() {
        assert_eq!(determinant(&sample()), 1.0);
        assert_eq!(determinant(&Matrix3::identity()), 1.0);
    }

    #[test]
    fn test_determinant_zero_column() {
        let m = Matrix3::from_columns(&[
            Vector3::zeros(),
            Vector3::new(2.0, 1.0, 6.0),
            Vector3::new(3.0, 4.0, 0.0),
        ]);
        assert_eq!(determinant(&m), 0.0);
    }

    #[test]
    fn test_adjugate() {
        let expected = Matrix3::from_columns(&[
            Vector3::new(-24.0, 20.0, -5.0),
            Vector3::new(18.0, -15.0, 4.0),
            Vector3::new(5.0, -4.0, 1.0),
        ]);
        assert_eq!(adjugate(&sample()), expected);
    }

    #[test]
    fn test_inverse_identity() {
        assert_eq!(inverse(&Matrix3::identity()).unwrap(), Matrix3::identity());
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        let inv = inverse(&m).unwrap();
        assert_relative_eq!(m * inv, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_singular() {
        let m = Matrix3::from_columns(&[
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(2.0, 4.0, 6.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]);
        assert_eq!(inverse(&m), Err(GeometryError::SingularMatrix));
    }
}
