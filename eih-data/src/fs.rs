//! Capability-based file access over UTF-8 paths.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` is a regular file.
///
/// # Errors
/// Returns an error when the parent directory cannot be opened, the path has
/// no file name, or nothing exists at `path` (`NotFound`).
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir")
    }

    #[rstest]
    fn distinguishes_files_from_directories() {
        let dir = TempDir::new().expect("create temp dir");
        let root = utf8(&dir);
        let file = root.join("tracts.json");
        std::fs::write(&file, "[]").expect("write fixture");

        assert!(file_is_file(&file).expect("stat file"));
        std::fs::create_dir(root.join("nested")).expect("create nested dir");
        assert!(!file_is_file(&root.join("nested")).expect("stat dir"));
    }

    #[rstest]
    fn missing_paths_report_not_found() {
        let dir = TempDir::new().expect("create temp dir");
        let err = file_is_file(&utf8(&dir).join("missing.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn relative_names_resolve_against_the_working_directory() {
        let err = file_is_file(Utf8Path::new("no-such-dataset.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
