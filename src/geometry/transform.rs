// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Affine transforms between triangles

use super::algebra;
use super::Triangle3;
use crate::error::GeometryError;
use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Linear map plus translation carrying one triangle's frame onto another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub linear: Matrix3<f64>,
    pub translation: Vector3<f64>,
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            linear: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Transform carrying `initial` onto `target`
    ///
    /// `initial` is a canonical triangle with its first vertex at the origin.
    /// The target is translated to the origin, both triangles get a basis of
    /// `[normal, v1, v2]` as columns, and the linear part is the change of
    /// basis `target_basis * inverse(initial_basis)`. The translation is the
    /// target's untranslated first vertex. Mapping the normal onto the normal
    /// pins down the out-of-plane axis, which two edge vectors alone leave
    /// free.
    pub fn between(initial: &Triangle3, target: &Triangle3) -> Result<Self, GeometryError> {
        let origin = target.vertices[0];
        let t1 = target.vertices[1] - origin;
        let t2 = target.vertices[2] - origin;
        let i1 = initial.vertices[1].coords;
        let i2 = initial.vertices[2].coords;

        let initial_normal = i1.cross(&i2).try_normalize(0.0).ok_or_else(|| {
            GeometryError::DegenerateTriangle("canonical triangle has zero area".into())
        })?;
        let target_normal = t1.cross(&t2).try_normalize(0.0).ok_or_else(|| {
            GeometryError::DegenerateTriangle("target triangle has zero area".into())
        })?;

        let initial_basis = Matrix3::from_columns(&[initial_normal, i1, i2]);
        let target_basis = Matrix3::from_columns(&[target_normal, t1, t2]);
        let linear = target_basis * algebra::inverse(&initial_basis)?;

        Ok(Self {
            linear,
            translation: origin.coords,
        })
    }

    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.linear * point.coords + self.translation)
    }

    /// Nine column-major linear components followed by the translation
    ///
    /// Matches the layout of a homogeneous 4x4 consumer with the last
    /// row/column implicitly `[0, 0, 0, 1]`.
    pub fn to_column_major(&self) -> [f64; 12] {
        let mut out = [0.0; 12];
        out[..9].copy_from_slice(self.linear.as_slice());
        out[9..].copy_from_slice(self.translation.as_slice());
        out
    }
}
