// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Error taxonomy for decoding and geometry

use thiserror::Error;

/// Errors raised while decoding a COLLADA document into triangles.
///
/// Every decode failure is terminal for the document being processed: the
/// pipeline either fully succeeds or reports the first error encountered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A single-cardinality element is missing or has multiple candidates
    #[error("document structure: {0}")]
    Structure(String),

    /// A semantic/source reference does not resolve to the expected block
    #[error("reference `{reference}` does not resolve to {expected}")]
    ReferentialIntegrity { reference: String, expected: String },

    /// A flat numeric buffer disagrees with its declared count or stride
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// A triangle index exceeds the decoded vertex count
    #[error("index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by the triangle geometry routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A matrix required for inversion has zero determinant
    #[error("matrix is singular (zero determinant)")]
    SingularMatrix,

    /// A triangle has collinear vertices or a zero-length hypotenuse
    #[error("degenerate triangle: {0}")]
    DegenerateTriangle(String),
}
