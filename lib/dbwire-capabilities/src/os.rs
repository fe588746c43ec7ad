use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;

/// Create `path` (and any missing parents) unless it already exists as a
/// directory. Returns whether this call created it.
pub fn ensure_directory(path: &Path) -> Result<bool, ScaffoldError> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    fs::write(path, contents).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_creates_missing_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("a").join("b");

        assert!(ensure_directory(&target).expect("ensure"));
        assert!(target.is_dir());
    }

    #[test]
    fn ensure_directory_is_a_no_op_when_already_present() {
        let dir = tempfile::tempdir().expect("tempdir");

        assert!(!ensure_directory(dir.path()).expect("ensure"));
    }

    #[test]
    fn ensure_directory_fails_when_a_file_is_in_the_way() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("occupied");
        fs::write(&target, "file, not directory").expect("seed");

        let err = ensure_directory(&target).expect_err("ensure should fail");
        assert!(matches!(err, ScaffoldError::CreateDir { .. }));
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("out.txt");
        fs::write(&target, "previous content, considerably longer").expect("seed");

        write_file(&target, "short").expect("write");

        assert_eq!(fs::read_to_string(&target).expect("read"), "short");
    }

    #[test]
    fn write_file_fails_without_a_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("missing").join("out.txt");

        let err = write_file(&target, "content").expect_err("write should fail");
        assert!(matches!(err, ScaffoldError::WriteFile { .. }));
    }
}
