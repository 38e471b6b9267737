//! Stage 3: move the finished staging tree to its destination.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        Outcome,
        ports::{Filesystem, Prompt},
    },
    error::SkelResult,
};

/// Write the personalized staging tree to the destination.
///
/// - Destination absent: plain recursive copy, parents created as needed.
/// - Destination present: exactly one yes/no confirmation. Decline returns
///   [`Outcome::Cancelled`] without writing anything; the affirmative
///   performs a destructive tree-merge (colliding relative paths are
///   overwritten, everything else is left in place).
#[instrument(skip(filesystem, prompt))]
pub fn materialize(
    filesystem: &dyn Filesystem,
    prompt: &dyn Prompt,
    staging: &Path,
    destination: &Path,
) -> SkelResult<Outcome> {
    if filesystem.exists(destination) {
        if !prompt.confirm_overwrite(destination)? {
            info!(destination = %destination.display(), "user declined, nothing written");
            return Ok(Outcome::Cancelled);
        }
    } else if let Some(parent) = destination.parent() {
        filesystem.create_dir_all(parent)?;
    }

    filesystem.copy_tree(staging, destination)?;
    info!(destination = %destination.display(), "project materialized");
    Ok(Outcome::Created)
}
