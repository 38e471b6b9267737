//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use skel_core::{application::ports::Filesystem, error::SkelResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> SkelResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> SkelResult<()> {
        for entry in WalkDir::new(src).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(src).to_path_buf();
                skel_core::error::SkelError::from(
                    skel_core::application::ApplicationError::FilesystemError {
                        path,
                        reason: format!("Failed to walk template tree: {e}"),
                    },
                )
            })?;

            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "relativize path"))?;
            let target = dst.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| map_io_error(parent, e, "create directory"))?;
                }
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
            }
        }
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> SkelResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    fn remove_dir_all(&self, path: &Path) -> SkelResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn read_to_string(&self, path: &Path) -> SkelResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SkelResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> skel_core::error::SkelError {
    use skel_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_tree_merges_into_existing_destination() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::create_dir_all(src.path().join("sub")).unwrap();
        std::fs::write(src.path().join("sub/a.txt"), "from-src").unwrap();
        std::fs::write(dst.path().join("keep.txt"), "kept").unwrap();
        std::fs::write(dst.path().join("sub2.txt"), "also kept").unwrap();

        let fs = LocalFilesystem::new();
        fs.copy_tree(src.path(), dst.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dst.path().join("sub/a.txt")).unwrap(),
            "from-src"
        );
        assert_eq!(
            std::fs::read_to_string(dst.path().join("keep.txt")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn copy_tree_overwrites_colliding_files() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("f.txt"), "new").unwrap();
        std::fs::write(dst.path().join("f.txt"), "old").unwrap();

        LocalFilesystem::new().copy_tree(src.path(), dst.path()).unwrap();
        assert_eq!(std::fs::read_to_string(dst.path().join("f.txt")).unwrap(), "new");
    }

    #[test]
    fn copy_tree_creates_missing_destination() {
        let src = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("f.txt"), "x").unwrap();

        let dst = root.path().join("brand/new/dir");
        LocalFilesystem::new().copy_tree(src.path(), &dst).unwrap();
        assert!(dst.join("f.txt").exists());
    }

    #[test]
    fn rename_moves_directory() {
        let root = tempfile::tempdir().unwrap();
        let from = root.path().join("old");
        let to = root.path().join("new");
        std::fs::create_dir(&from).unwrap();
        std::fs::write(from.join("f"), "x").unwrap();

        LocalFilesystem::new().rename(&from, &to).unwrap();
        assert!(!from.exists());
        assert!(to.join("f").exists());
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let err = LocalFilesystem::new()
            .read_to_string(Path::new("/definitely/not/here"))
            .unwrap_err();
        assert!(matches!(
            err,
            skel_core::error::SkelError::Application(
                skel_core::application::ApplicationError::FilesystemError { .. }
            )
        ));
    }
}
