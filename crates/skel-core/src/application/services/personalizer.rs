//! Stage 2: rename the placeholder package and substitute the name token.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{PLACEHOLDER_DIR, expand_pkg_name, substitution_targets},
    error::SkelResult,
};

/// Personalize the staging tree for `package_name`.
///
/// Two steps, in order:
/// 1. `src/pkg_name` → `src/<package_name>`. A pre-existing directory at the
///    target name can only come from a stale staging tree; it is removed
///    before the rename.
/// 2. Each fixed substitution target (paths under the *renamed* directory)
///    is read, token-expanded, and rewritten in place.
///
/// A missing placeholder directory or target file means the template is
/// malformed and fails the pipeline.
#[instrument(skip(filesystem, staging))]
pub fn personalize(
    filesystem: &dyn Filesystem,
    staging: &Path,
    package_name: &str,
) -> SkelResult<()> {
    rename_package_dir(filesystem, staging, package_name)?;

    for relative in substitution_targets(package_name) {
        let path = staging.join(&relative);
        if !filesystem.exists(&path) {
            return Err(ApplicationError::MissingTemplateAsset { path }.into());
        }

        let content = filesystem.read_to_string(&path)?;
        filesystem.write_file(&path, &expand_pkg_name(&content, package_name))?;
        debug!(file = %relative.display(), "token substituted");
    }

    Ok(())
}

fn rename_package_dir(
    filesystem: &dyn Filesystem,
    staging: &Path,
    package_name: &str,
) -> SkelResult<()> {
    let placeholder = staging.join(PLACEHOLDER_DIR);
    let target = staging.join("src").join(package_name);

    if !filesystem.exists(&placeholder) {
        return Err(ApplicationError::MissingTemplateAsset { path: placeholder }.into());
    }

    // Stale-tree case: an earlier occupant of the target name would make
    // the rename ambiguous.
    if filesystem.exists(&target) {
        warn!(path = %target.display(), "removing stale directory at rename target");
        filesystem.remove_dir_all(&target)?;
    }

    filesystem.rename(&placeholder, &target)?;
    debug!(from = %placeholder.display(), to = %target.display(), "package directory renamed");
    Ok(())
}
