// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Triangle canonicalization, box models, and subdivision
//!
//! "Hypotenuse" here means the longest edge of an arbitrary triangle, not
//! just of a right triangle. It is the canonical reference edge: box models
//! and subdivisions are expressed relative to it.

use crate::error::GeometryError;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Plane-embedded triangle in 3-space
///
/// Vertex order is significant: winding is counter-clockwise viewed from the
/// outward normal, and the canonicalized form starts at the hypotenuse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle3 {
    pub vertices: [Point3<f64>; 3],
}

/// Bounding box of a triangle relative to its hypotenuse
///
/// The triangle fits a `width x height` rectangle whose two top corners are
/// cut off by the `border_left`/`border_right` insets (the distances from the
/// hypotenuse endpoints to the foot of the altitude). This is exactly the
/// data a CSS border-triangle needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxModel {
    pub width: f64,
    pub height: f64,
    pub border_left: f64,
    pub border_right: f64,
}

impl Triangle3 {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Edge lengths, where edge `i` runs from vertex `i` to vertex `(i+1) % 3`
    pub fn edge_lengths(&self) -> [f64; 3] {
        let v = &self.vertices;
        [
            (v[1] - v[0]).norm(),
            (v[2] - v[1]).norm(),
            (v[0] - v[2]).norm(),
        ]
    }

    /// Index of the longest edge
    ///
    /// Left-to-right scan keeping the first edge strictly longer than the
    /// running maximum, so equal-length ties resolve to the earlier index.
    /// Symmetric triangles depend on this for reproducible output.
    pub fn hypotenuse_index(&self) -> usize {
        let lengths = self.edge_lengths();
        let mut max_length = 0.0;
        let mut index = 0;
        for (i, &length) in lengths.iter().enumerate() {
            if length > max_length {
                max_length = length;
                index = i;
            }
        }
        index
    }

    /// Cyclic rotation starting at the hypotenuse, winding preserved
    pub fn with_hypotenuse_first(&self) -> Triangle3 {
        let i = self.hypotenuse_index();
        let v = &self.vertices;
        Triangle3::new(v[i], v[(i + 1) % 3], v[(i + 2) % 3])
    }

    /// Foot of the altitude from the third vertex onto the hypotenuse
    ///
    /// Expects a hypotenuse-first triangle: with `n = v1 - v0`, the foot is
    /// the point on the line `v0 + lambda*n` lying in the plane through `v2`
    /// with normal `n`, i.e. `lambda = (n.v2 - n.v0) / (n.n)`.
    pub fn altitude_foot(&self) -> Result<Point3<f64>, GeometryError> {
        let [v0, v1, v2] = self.vertices;
        let n = v1 - v0;
        let nn = n.norm_squared();
        if nn == 0.0 {
            return Err(GeometryError::DegenerateTriangle(
                "zero-length hypotenuse".into(),
            ));
        }
        let lambda = (n.dot(&v2.coords) - n.dot(&v0.coords)) / nn;
        Ok(v0 + n * lambda)
    }

    /// Box model of a hypotenuse-first triangle
    pub fn box_model(&self) -> Result<BoxModel, GeometryError> {
        let [v0, v1, v2] = self.vertices;
        let foot = self.altitude_foot()?;
        Ok(BoxModel {
            width: (v1 - v0).norm(),
            height: (v2 - foot).norm(),
            border_left: (foot - v0).norm(),
            border_right: (foot - v1).norm(),
        })
    }

    /// Split at the altitude foot into two right triangles
    ///
    /// Approximates an arbitrary triangle as two right triangles for simpler
    /// rendering. The foot, the right angle of both children, stays the
    /// middle vertex so the winding convention carries over.
    pub fn subdivide(&self) -> Result<[Triangle3; 2], GeometryError> {
        let rotated = self.with_hypotenuse_first();
        let [v0, v1, v2] = rotated.vertices;
        let foot = rotated.altitude_foot()?;
        Ok([
            Triangle3::new(v0, foot, v2),
            Triangle3::new(v2, foot, v1),
        ])
    }

    /// True when the three vertices are collinear (zero area)
    ///
    /// Degeneracy is otherwise detected lazily by the routine that first
    /// needs a non-degenerate input; this is the eager check for callers
    /// that want to reject bad triangles up front.
    pub fn is_degenerate(&self) -> bool {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(&(v2 - v0)).norm_squared() == 0.0
    }
}
