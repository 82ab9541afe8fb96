// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Triplane
//!
//! Extracts triangle meshes from COLLADA (.dae) documents and derives the
//! per-triangle box models and affine transforms needed to render each
//! triangle as a flat CSS primitive in 3-space.

pub mod error;
pub mod geometry;
pub mod io;
pub mod render;

pub use error::{DecodeError, GeometryError};
pub use geometry::{AffineTransform, BoxModel, Triangle3};
pub use io::{extract_triangles, import_dae_file, parse_dae, Document, IndexTriple};

use anyhow::Result;

/// Extract the triangles of a COLLADA document given as XML text
pub fn triangles_from_str(source: &str) -> Result<Vec<Triangle3>> {
    let document = io::parse_dae(source)?;
    Ok(io::extract_triangles(&document)?)
}

/// Extract the triangles of a .dae file
pub fn triangles_from_file(path: &str) -> Result<Vec<Triangle3>> {
    let document = io::import_dae_file(path)?;
    Ok(io::extract_triangles(&document)?)
}

/// Render a .dae file into a standalone HTML document of CSS triangles
pub fn render_file(path: &str) -> Result<String> {
    let triangles = triangles_from_file(path)?;
    let markup = render::render_triangles(&triangles)?;
    Ok(render::html_document(&markup))
}
