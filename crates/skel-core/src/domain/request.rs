//! The scaffold request value object.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Everything the pipeline needs to know about one scaffold operation.
///
/// The request is immutable once built; path computation is derived, never
/// stored, so the two invariants below cannot drift apart:
///
/// - no project name → destination is the working directory itself
///   (in-place scaffold)
/// - a project name → destination is `working_directory / name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    project_name: Option<String>,
    working_directory: PathBuf,
}

impl ScaffoldRequest {
    /// Build a request. `project_name = None` means "scaffold into the
    /// working directory".
    pub fn new(project_name: Option<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            project_name,
            working_directory: working_directory.into(),
        }
    }

    /// The explicit project name, if one was given.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// The directory the request was issued from.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Final target path of the scaffold.
    pub fn destination(&self) -> PathBuf {
        match &self.project_name {
            Some(name) => self.working_directory.join(name),
            None => self.working_directory.clone(),
        }
    }

    /// The package name the template is personalized with.
    ///
    /// For in-place scaffolds the name is derived from the final component
    /// of the working directory, e.g. `/home/me/myapp` → `myapp`. Returns
    /// `None` when the directory has no usable final component (`/`, `..`).
    pub fn package_name(&self) -> Option<String> {
        match &self.project_name {
            Some(name) => Some(name.clone()),
            None => self
                .working_directory
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_request_destination_is_subdirectory() {
        let req = ScaffoldRequest::new(Some("myapp".into()), "/work");
        assert_eq!(req.destination(), PathBuf::from("/work/myapp"));
        assert_eq!(req.package_name().as_deref(), Some("myapp"));
    }

    #[test]
    fn in_place_request_destination_is_working_directory() {
        let req = ScaffoldRequest::new(None, "/work/current");
        assert_eq!(req.destination(), PathBuf::from("/work/current"));
    }

    #[test]
    fn in_place_package_name_derives_from_directory() {
        let req = ScaffoldRequest::new(None, "/work/mypkg");
        assert_eq!(req.package_name().as_deref(), Some("mypkg"));
    }

    #[test]
    fn root_directory_yields_no_package_name() {
        let req = ScaffoldRequest::new(None, "/");
        assert_eq!(req.package_name(), None);
    }
}
