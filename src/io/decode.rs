// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Mesh extraction and index/vertex decoding
//!
//! A COLLADA mesh stores connectivity as one flat integer buffer interleaving
//! an index per input semantic (VERTEX, NORMAL, ...) for every
//! vertex-in-triangle. The interleave width ("stride") is not declared; it
//! falls out of `buffer length / (triangle count * 3)` and must divide
//! evenly. All stride/offset arithmetic lives here, and every cross-reference
//! between mesh sub-blocks is validated before any payload is decoded.

use crate::error::DecodeError;
use crate::geometry::Triangle3;
use crate::io::schema::{Document, Mesh};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Semantic tag of the input that carries vertex indices
pub const VERTEX_SEMANTIC: &str = "VERTEX";

/// Three indices into a point sequence, one triangle by reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexTriple(pub [usize; 3]);

/// Locate the single mesh of a document
///
/// Exactly one geometry library, one geometry, and one mesh are supported;
/// anything else fails rather than guessing which candidate was meant.
pub fn single_mesh(document: &Document) -> Result<&Mesh, DecodeError> {
    let library = single(&document.geometry_libraries, "geometry library")?;
    let geometry = single(&library.geometries, "geometry")?;
    single(&geometry.meshes, "mesh")
}

fn single<'a, T>(items: &'a [T], what: &str) -> Result<&'a T, DecodeError> {
    match items {
        [item] => Ok(item),
        [] => Err(DecodeError::Structure(format!("document contains no {what}"))),
        _ => Err(DecodeError::Structure(format!(
            "document contains multiple {what} blocks ({})",
            items.len()
        ))),
    }
}

/// Decode the triangle block's flat index buffer into vertex index triples
///
/// The VERTEX input's source reference is checked against the mesh's vertex
/// block id before the buffer is touched; a mesh whose triangle block points
/// at some other vertex block is rejected outright.
pub fn decode_triangle_indices(mesh: &Mesh) -> Result<Vec<IndexTriple>, DecodeError> {
    let triangles = single(&mesh.triangles, "triangles")?;
    let vertices = single(&mesh.vertices, "vertices")?;

    let expected = format!("#{}", vertices.id);
    let vertex_input = triangles
        .inputs
        .iter()
        .find(|input| input.semantic == VERTEX_SEMANTIC)
        .ok_or_else(|| {
            DecodeError::Structure("triangles block has no VERTEX input".to_string())
        })?;
    if vertex_input.source != expected {
        return Err(DecodeError::ReferentialIntegrity {
            reference: vertex_input.source.clone(),
            expected: format!("vertex block `{expected}`"),
        });
    }
    let offset = vertex_input.offset.unwrap_or(0);

    let index_data = single(&triangles.index_data, "triangle index payload")?;
    let values = parse_integers(&index_data.data)?;

    if triangles.count == 0 {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        return Err(DecodeError::MalformedData(format!(
            "triangles block declares 0 triangles but holds {} indices",
            values.len()
        )));
    }
    let group = triangles.count * 3;
    if values.len() % group != 0 {
        return Err(DecodeError::MalformedData(format!(
            "index buffer length {} is not divisible by {} triangles x 3",
            values.len(),
            triangles.count
        )));
    }
    let stride = values.len() / group;
    if offset >= stride {
        return Err(DecodeError::MalformedData(format!(
            "VERTEX input offset {offset} exceeds index stride {stride}"
        )));
    }

    // Every stride-th value, starting at the VERTEX offset, is a vertex
    // index; this yields exactly 3 * count values in buffer order.
    let picked: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == offset)
        .map(|(_, &value)| value)
        .collect();

    Ok(picked
        .chunks_exact(3)
        .map(|chunk| IndexTriple([chunk[0], chunk[1], chunk[2]]))
        .collect())
}

/// Decode the mesh's position source into points, in declaration order
pub fn decode_vertex_positions(mesh: &Mesh) -> Result<Vec<Point3<f64>>, DecodeError> {
    let vertices = single(&mesh.vertices, "vertices")?;
    let input = single(&vertices.inputs, "vertices input")?;

    let source = mesh
        .sources
        .iter()
        .find(|source| format!("#{}", source.id) == input.source)
        .ok_or_else(|| DecodeError::ReferentialIntegrity {
            reference: input.source.clone(),
            expected: "a position source in this mesh".to_string(),
        })?;
    let float_array = source.float_array.as_ref().ok_or_else(|| {
        DecodeError::Structure(format!("source `{}` has no float_array", source.id))
    })?;

    if float_array.count % 3 != 0 {
        return Err(DecodeError::MalformedData(format!(
            "float_array count {} is not divisible by 3",
            float_array.count
        )));
    }
    let values = parse_floats(&float_array.data)?;
    if values.len() != float_array.count {
        return Err(DecodeError::MalformedData(format!(
            "float_array declares {} values but holds {}",
            float_array.count,
            values.len()
        )));
    }

    Ok(values
        .chunks_exact(3)
        .map(|chunk| Point3::new(chunk[0], chunk[1], chunk[2]))
        .collect())
}

/// Resolve index triples against the point sequence, order preserved
pub fn assemble_triangles(
    triples: &[IndexTriple],
    points: &[Point3<f64>],
) -> Result<Vec<Triangle3>, DecodeError> {
    triples
        .iter()
        .map(|triple| {
            let mut resolved = [Point3::origin(); 3];
            for (slot, &index) in resolved.iter_mut().zip(triple.0.iter()) {
                *slot = *points
                    .get(index)
                    .ok_or(DecodeError::IndexOutOfRange {
                        index,
                        len: points.len(),
                    })?;
            }
            Ok(Triangle3::new(resolved[0], resolved[1], resolved[2]))
        })
        .collect()
}

/// Full pipeline: document -> single mesh -> triangles
pub fn extract_triangles(document: &Document) -> Result<Vec<Triangle3>, DecodeError> {
    let mesh = single_mesh(document)?;
    let triples = decode_triangle_indices(mesh)?;
    let points = decode_vertex_positions(mesh)?;
    assemble_triangles(&triples, &points)
}

fn parse_integers(data: &str) -> Result<Vec<usize>, DecodeError> {
    data.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| {
                DecodeError::MalformedData(format!("invalid index token `{token}`"))
            })
        })
        .collect()
}

fn parse_floats(data: &str) -> Result<Vec<f64>, DecodeError> {
    data.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| {
                DecodeError::MalformedData(format!("invalid float token `{token}`"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::schema::{FloatArray, IndexArray, Input, Source, Triangles, Vertices};

    fn plane_mesh() -> Mesh {
        Mesh {
            sources: vec![Source {
                id: "positions".to_string(),
                float_array: Some(FloatArray {
                    count: 9,
                    data: "0 0 0 1 0 0 0 1 0".to_string(),
                }),
            }],
            vertices: vec![Vertices {
                id: "verts".to_string(),
                inputs: vec![Input {
                    semantic: "POSITION".to_string(),
                    source: "#positions".to_string(),
                    offset: None,
                }],
            }],
            triangles: vec![Triangles {
                count: 1,
                inputs: vec![Input {
                    semantic: VERTEX_SEMANTIC.to_string(),
                    source: "#verts".to_string(),
                    offset: Some(0),
                }],
                index_data: vec![IndexArray {
                    data: "0 1 2".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_decode_triangle_indices() {
        let triples = decode_triangle_indices(&plane_mesh()).unwrap();
        assert_eq!(triples, vec![IndexTriple([0, 1, 2])]);
    }

    #[test]
    fn test_decode_interleaved_indices() {
        let mut mesh = plane_mesh();
        mesh.triangles[0].inputs.push(Input {
            semantic: "NORMAL".to_string(),
            source: "#normals".to_string(),
            offset: Some(1),
        });
        mesh.triangles[0].inputs[0].offset = Some(0);
        mesh.triangles[0].index_data[0].data = "0 9 1 9 2 9".to_string();
        let triples = decode_triangle_indices(&mesh).unwrap();
        assert_eq!(triples, vec![IndexTriple([0, 1, 2])]);
    }

    #[test]
    fn test_decode_rejects_mismatched_vertex_source() {
        let mut mesh = plane_mesh();
        mesh.triangles[0].inputs[0].source = "#other-verts".to_string();
        assert!(matches!(
            decode_triangle_indices(&mesh),
            Err(DecodeError::ReferentialIntegrity { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_integer_stride() {
        let mut mesh = plane_mesh();
        mesh.triangles[0].index_data[0].data = "0 1 2 0".to_string();
        assert!(matches!(
            decode_triangle_indices(&mesh),
            Err(DecodeError::MalformedData(_))
        ));
    }

    #[test]
    fn test_decode_empty_triangle_block() {
        let mut mesh = plane_mesh();
        mesh.triangles[0].count = 0;
        mesh.triangles[0].index_data[0].data = String::new();
        assert_eq!(decode_triangle_indices(&mesh).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_vertex_positions() {
        let points = decode_vertex_positions(&plane_mesh()).unwrap();
        assert_eq!(
            points,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_decode_rejects_unresolved_position_source() {
        let mut mesh = plane_mesh();
        mesh.vertices[0].inputs[0].source = "#missing".to_string();
        assert!(matches!(
            decode_vertex_positions(&mesh),
            Err(DecodeError::ReferentialIntegrity { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_vec3_count() {
        let mut mesh = plane_mesh();
        mesh.sources[0].float_array.as_mut().unwrap().count = 8;
        assert!(matches!(
            decode_vertex_positions(&mesh),
            Err(DecodeError::MalformedData(_))
        ));
    }

    #[test]
    fn test_decode_rejects_short_float_payload() {
        let mut mesh = plane_mesh();
        mesh.sources[0].float_array.as_mut().unwrap().data = "0 0 0 1 0 0".to_string();
        assert!(matches!(
            decode_vertex_positions(&mesh),
            Err(DecodeError::MalformedData(_))
        ));
    }

    #[test]
    fn test_assemble_triangles() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let triangles = assemble_triangles(&[IndexTriple([0, 1, 2])], &points).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].vertices[2], Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_assemble_rejects_out_of_range_index() {
        let points = vec![Point3::new(0.0, 0.0, 0.0)];
        assert_eq!(
            assemble_triangles(&[IndexTriple([0, 0, 3])], &points),
            Err(DecodeError::IndexOutOfRange { index: 3, len: 1 })
        );
    }
}
