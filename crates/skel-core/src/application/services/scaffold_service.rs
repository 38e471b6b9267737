//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the staged materialization protocol:
//! 1. Compute a collision-checked staging path
//! 2. Stage: copy the template tree into the staging area
//! 3. Personalize: rename the placeholder package, substitute the name token
//! 4. Materialize: move the finished tree to the destination (with
//!    confirmation if it already exists)
//! 5. Clean up the staging area on *every* exit path
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Prompt},
        services::{materializer, personalizer, stager},
    },
    domain::{DomainError, DomainValidator as validator, ScaffoldRequest},
    error::{SkelError, SkelResult},
};

/// How a completed run ended.
///
/// Cancellation is an ordinary outcome, not an error; only failures travel
/// through the `Err` channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The project was written to its destination.
    Created,
    /// The user declined the overwrite confirmation; nothing was written.
    Cancelled,
}

/// Main scaffolding service.
///
/// Owns the lifecycle of one scaffold operation and exclusively owns the
/// staging directory for its duration.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    prompt: Box<dyn Prompt>,
    template_root: PathBuf,
    staging_root: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// `template_root` is the bundled template tree; `staging_root` is the
    /// directory staging areas are created under (typically the OS temp dir).
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompt: Box<dyn Prompt>,
        template_root: impl Into<PathBuf>,
        staging_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            prompt,
            template_root: template_root.into(),
            staging_root: staging_root.into(),
        }
    }

    /// Run one scaffold operation.
    ///
    /// Staging uniqueness relies on a random identifier, not an interlock:
    /// two simultaneous runs against the same destination are not supported.
    #[instrument(skip_all, fields(destination = %request.destination().display()))]
    pub fn run(&self, request: &ScaffoldRequest) -> SkelResult<Outcome> {
        self.run_with_staging_id(request, &Uuid::new_v4().to_string())
    }

    /// Run with an explicit staging identifier.
    ///
    /// Exposed so the staging-path collision can be forced deterministically;
    /// normal runs go through [`Self::run`].
    pub fn run_with_staging_id(&self, request: &ScaffoldRequest, id: &str) -> SkelResult<Outcome> {
        let package_name = request
            .package_name()
            .ok_or_else(|| DomainError::UnnameablePackage {
                directory: request.working_directory().display().to_string(),
            })?;
        validator::validate_package_name(&package_name).map_err(SkelError::Domain)?;

        let staging = self.staging_root.join(staging_dir_name(id));

        // A pre-existing path at the exact staging name is fatal, and raised
        // before anything is created, so there is nothing to clean up here.
        if self.filesystem.exists(&staging) {
            return Err(ApplicationError::StagingCollision { path: staging }.into());
        }

        info!(package = %package_name, staging = %staging.display(), "scaffold started");

        // The guard removes the staging tree when it drops, whether the
        // pipeline succeeds, is cancelled, or errors out.
        let _cleanup = StagingGuard {
            filesystem: self.filesystem.as_ref(),
            path: staging.clone(),
        };

        stager::stage(self.filesystem.as_ref(), &self.template_root, &staging)?;
        personalizer::personalize(self.filesystem.as_ref(), &staging, &package_name)?;
        let outcome = materializer::materialize(
            self.filesystem.as_ref(),
            self.prompt.as_ref(),
            &staging,
            &request.destination(),
        )?;

        info!(?outcome, "scaffold finished");
        Ok(outcome)
    }
}

/// Scoped ownership of the staging directory.
///
/// Dropping the guard is the single unconditional finalizer of the pipeline.
/// Removal is best-effort: a failure here must not mask the pipeline result,
/// so it is logged and swallowed.
struct StagingGuard<'a> {
    filesystem: &'a dyn Filesystem,
    path: PathBuf,
}

impl Drop for StagingGuard<'_> {
    fn drop(&mut self) {
        if !self.filesystem.exists(&self.path) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(&self.path) {
            warn!(error = %e, path = %self.path.display(), "staging cleanup failed");
        }
    }
}

/// Staging directory name for an identifier (shared with tests).
pub fn staging_dir_name(id: &str) -> String {
    format!("skel_staging_{id}")
}
