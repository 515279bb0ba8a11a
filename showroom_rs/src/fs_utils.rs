//! Filesystem helpers shared by the sitemap emitter and the site builder.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `contents` to `path` via a temporary file in the same directory,
/// then rename it into place.
///
/// Creates missing parent directories. On any failure the target keeps its
/// previous content (or stays absent).
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("a").join("b").join("file.txt");

        write_atomic(&path, b"hello").expect("write");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn replaces_previous_file_without_leftovers() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("file.txt");
        std::fs::write(&path, "old").expect("seed");

        write_atomic(&path, b"new").expect("write");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn fails_when_parent_is_a_file() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("public");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let path = blocker.join("sitemap.xml");

        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
