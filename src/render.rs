// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! CSS/HTML render stage
//!
//! Each mesh triangle is split into two right triangles, and each half is
//! drawn as a CSS border-triangle: a 0x0 `<div>` whose colored bottom border
//! (the box-model height) is clipped by transparent left/right borders (the
//! insets), then placed in 3-space by a `matrix3d` transform.

use crate::error::GeometryError;
use crate::geometry::{AffineTransform, BoxModel, Triangle3};
use nalgebra::Point3;
use rayon::prelude::*;

/// CSS class shared by every emitted triangle div
pub const TRIANGLE_CLASS: &str = "triangle";

/// Format an affine transform as a CSS `matrix3d(...)` value
///
/// Column-major, with the homogeneous last row spelled out as `0,0,0,1`.
pub fn matrix3d(transform: &AffineTransform) -> String {
    let m = transform.to_column_major();
    format!(
        "matrix3d({},{},{},0,{},{},{},0,{},{},{},0,{},{},{},1)",
        m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8], m[9], m[10], m[11]
    )
}

/// Border-triangle div for one box model
pub fn css_triangle(model: &BoxModel, transform: &str, class_name: &str) -> String {
    format!(
        "<div class=\"{class_name}\" style=\"\
border-bottom-width: {height}px;\
border-left-width: {left}px; \
border-right-width: {right}px;\
transform: {transform};\
\"></div>",
        height = model.height,
        left = model.border_left,
        right = model.border_right,
    )
}

/// Canonical flat triangle matching a box model
///
/// First vertex at the origin (the div's transform-origin), hypotenuse along
/// +x. CSS y grows downward, so the apex sits above the baseline at -y.
pub fn canonical_triangle(model: &BoxModel) -> Triangle3 {
    Triangle3::new(
        Point3::origin(),
        Point3::new(model.width, 0.0, 0.0),
        Point3::new(model.border_left, -model.height, 0.0),
    )
}

/// Render one mesh triangle as two transformed right-triangle divs
pub fn render_triangle(triangle: &Triangle3) -> Result<String, GeometryError> {
    let halves = triangle.subdivide()?;
    let mut divs = Vec::with_capacity(2);
    for half in &halves {
        let rotated = half.with_hypotenuse_first();
        let model = rotated.box_model()?;
        let transform = AffineTransform::between(&canonical_triangle(&model), &rotated)?;
        divs.push(css_triangle(&model, &matrix3d(&transform), TRIANGLE_CLASS));
    }
    Ok(divs.join("\n"))
}

/// Render a triangle sequence, order preserved
///
/// Each triangle is independent, so the batch fans out across rayon workers.
pub fn render_triangles(triangles: &[Triangle3]) -> Result<String, GeometryError> {
    let divs = triangles
        .par_iter()
        .map(render_triangle)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(divs.join("\n"))
}

/// Standalone HTML document wrapping the rendered triangle divs
pub fn html_document(triangles: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>

<head>
    <style>
        body,
        main {{
            height: 100vh;
            width: 100vw;
            transform-style: preserve-3d;
        }}

        main {{
            perspective: 800px;
        }}

        .center {{
            position: relative;
            transform-style: preserve-3d;
            width: 0;
            height: 0;
            left: 50%;
            top: 50%;
            animation: spin 5s linear infinite;
        }}

        .triangle {{
            width: 0;
            height: 0;
            position: absolute;
            transform-origin: bottom left;

            border: 0px solid transparent;
            border-bottom-color: rgba(255, 0, 0, 0.2);
        }}

        @keyframes spin {{
            0% {{
                transform: translateZ(-200px) translateY(100px) rotateY(0deg)
            }}

            100% {{
                transform: translateZ(-200px) translateY(100px) rotateY(360deg)
            }}
        }}
    </style>
</head>

<body>
    <main>
        <div class="center">

            {triangles}

        </div>
    </main>
</body>

</html>
"#
    )
}
