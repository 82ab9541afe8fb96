// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Typed COLLADA document model
//!
//! Only the `library_geometries -> geometry -> mesh` fragment is modeled;
//! materials, scenes, and animations are ignored by serde. Repeated elements
//! deserialize as `Vec`s so cardinality is checked in one place
//! ([`crate::io::decode`]) instead of scattered through consuming code.

use serde::Deserialize;

/// Root `<COLLADA>` element
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(rename = "library_geometries", default)]
    pub geometry_libraries: Vec<GeometryLibrary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryLibrary {
    #[serde(rename = "geometry", default)]
    pub geometries: Vec<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "mesh", default)]
    pub meshes: Vec<Mesh>,
}

/// One `<mesh>` element: position sources, a vertex block, a triangle block
#[derive(Debug, Clone, Deserialize)]
pub struct Mesh {
    #[serde(rename = "source", default)]
    pub sources: Vec<Source>,
    #[serde(rename = "vertices", default)]
    pub vertices: Vec<Vertices>,
    #[serde(rename = "triangles", default)]
    pub triangles: Vec<Triangles>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "float_array")]
    pub float_array: Option<FloatArray>,
}

/// Whitespace-delimited float payload with its declared value count
#[derive(Debug, Clone, Deserialize)]
pub struct FloatArray {
    #[serde(rename = "@count")]
    pub count: usize,
    #[serde(rename = "$text", default)]
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Vertices {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "input", default)]
    pub inputs: Vec<Input>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    #[serde(rename = "@semantic")]
    pub semantic: String,
    /// Reference to another block as `"#" + id`
    #[serde(rename = "@source")]
    pub source: String,
    /// Position within each interleaved index group; only on triangle inputs
    #[serde(rename = "@offset", default)]
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Triangles {
    #[serde(rename = "@count")]
    pub count: usize,
    #[serde(rename = "input", default)]
    pub inputs: Vec<Input>,
    #[serde(rename = "p", default)]
    pub index_data: Vec<IndexArray>,
}

/// Whitespace-delimited flat integer index payload
#[derive(Debug, Clone, Deserialize)]
pub struct IndexArray {
    #[serde(rename = "$text", default)]
    pub data: String,
}
