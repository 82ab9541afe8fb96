// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! COLLADA file importer

use crate::io::schema::Document;
use anyhow::{Context, Result};
use std::fs;

/// Import a .dae file and parse it into a typed document
pub fn import_dae_file(path: &str) -> Result<Document> {
    let source = fs::read_to_string(path)
        .context(format!("Failed to read COLLADA file: {}", path))?;

    super::parse_dae(&source)
        .context(format!("Failed to parse COLLADA file: {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_dae_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"<COLLADA version="1.4.1"><library_geometries/></COLLADA>"#
        )?;

        let document = import_dae_file(file.path().to_str().unwrap())?;
        assert_eq!(document.geometry_libraries.len(), 1);

        Ok(())
    }

    #[test]
    fn test_import_missing_file() {
        assert!(import_dae_file("does/not/exist.dae").is_err());
    }
}
