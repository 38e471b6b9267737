//! Stage 1: populate the staging area from the template tree.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::SkelResult,
};

/// Copy the entire template tree into the staging path.
///
/// The orchestrator guarantees a fresh staging path before this runs, so
/// the copy never merges in practice. No side effects outside the staging
/// path.
#[instrument(skip(filesystem))]
pub fn stage(filesystem: &dyn Filesystem, template_root: &Path, staging: &Path) -> SkelResult<()> {
    if !filesystem.exists(template_root) {
        return Err(ApplicationError::MissingTemplateAsset {
            path: template_root.to_path_buf(),
        }
        .into());
    }

    filesystem.copy_tree(template_root, staging)?;
    debug!(staging = %staging.display(), "template copied into staging area");
    Ok(())
}
