//! Read primitives

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_text_returns_file_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dinghy.yml");
        fs::write(&path, "parserFormat: yaml\n").unwrap();

        assert_eq!(read_text(&path).unwrap(), "parserFormat: yaml\n");
    }

    #[test]
    fn read_text_reports_path_on_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("missing.yml"));
    }
}
