//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `skel-adapters` crate provides implementations.

use std::path::Path;

use crate::error::SkelResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skel_adapters::filesystem::LocalFilesystem` (production)
/// - `skel_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Whole-tree and whole-file operations only; the pipeline never streams
/// - `copy_tree` has merge semantics so it covers both the fresh-destination
///   and the confirmed-overwrite materialization branches
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SkelResult<()>;

    /// Recursively copy a directory tree, merging into an existing
    /// destination. Existing directories are reused; colliding files are
    /// overwritten. The destination is created if absent.
    fn copy_tree(&self, src: &Path, dst: &Path) -> SkelResult<()>;

    /// Rename a path.
    fn rename(&self, from: &Path, to: &Path) -> SkelResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SkelResult<()>;

    /// Read an entire file into a string.
    fn read_to_string(&self, path: &Path) -> SkelResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SkelResult<()>;
}

/// Port for the single interactive confirmation.
///
/// Implemented by:
/// - `skel_adapters::prompt::StdinPrompt` (production)
/// - `skel_adapters::prompt::AutoConfirm` (`--yes`)
/// - `skel_adapters::prompt::ScriptedPrompt` (testing)
pub trait Prompt: Send + Sync {
    /// Ask whether the project may be created at an already-existing
    /// destination. `Ok(true)` means the user gave the exact affirmative.
    fn confirm_overwrite(&self, destination: &Path) -> SkelResult<bool>;
}
