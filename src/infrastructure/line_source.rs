use crate::application::services::LineSource;
use crate::domain::value_objects::CharacterSequence;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the whole file up front so a read error leaves nothing half-processed
pub struct FileLineSource;

impl LineSource for FileLineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<CharacterSequence>> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Ok(contents.lines().map(CharacterSequence::from_line).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn lines_are_stripped() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  ab \r\n\n\tcd\n").unwrap();

        let lines = FileLineSource.read_lines(file.path()).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars(), &['a', 'b']);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].chars(), &['c', 'd']);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileLineSource
            .read_lines(&dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(err.to_string().starts_with("could not read"));
    }

    #[test]
    fn non_utf8_content_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x61, 0xff, 0x0a]).unwrap();
        assert!(FileLineSource.read_lines(file.path()).is_err());
    }
}
