// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! I/O module - COLLADA parsing, importing, and mesh decoding

mod decode;
mod importer;
mod parser;
pub mod schema;

pub use decode::{
    assemble_triangles, decode_triangle_indices, decode_vertex_positions, extract_triangles,
    single_mesh, IndexTriple, VERTEX_SEMANTIC,
};
pub use importer::import_dae_file;
pub use parser::parse_dae;
pub use schema::Document;
