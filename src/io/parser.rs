// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! COLLADA XML parser using quick-xml

use crate::io::schema::Document;
use anyhow::{Context, Result};

/// Parse COLLADA XML text into a typed document
pub fn parse_dae(source: &str) -> Result<Document> {
    quick_xml::de::from_str(source).context("Failed to parse COLLADA XML")
}
