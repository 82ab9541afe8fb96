// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Geometry module - 3x3 algebra, triangle canonicalization, transforms

pub mod algebra;
mod transform;
mod triangle;

pub use transform::AffineTransform;
pub use triangle::{BoxModel, Triangle3};
