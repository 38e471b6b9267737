//! Built-in template provisioning and template-root resolution.
//!
//! The default skeleton ships embedded in this crate so a cargo-installed
//! binary needs no sidecar directory. [`ensure_builtin_template`] writes it
//! to disk on demand; [`resolve_template_root`] picks the template tree a
//! run will stage from.
//!
//! # Template resolution order
//!
//! 1. **Explicit path**: `--template-dir` flag or config file entry.
//!    Must exist; a missing explicit path is an error, never silently
//!    skipped.
//! 2. **`$SKEL_TEMPLATES_DIR`**: environment variable override.  Set this
//!    in `.env` or your shell profile to point at a custom template tree.
//! 3. **`<executable-dir>/templates/default`**: sibling to the `skel`
//!    binary, for installations that do ship a template directory.
//! 4. **Provisioned builtin**: the embedded skeleton, written under the
//!    caller-supplied provision root (the CLI passes the user cache dir).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use skel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SkelResult,
};

/// Environment variable overriding the template location.
pub const TEMPLATES_DIR_ENV: &str = "SKEL_TEMPLATES_DIR";

/// The embedded default skeleton: (relative path, content).
///
/// `setup.py` and `src/pkg_name/cli.py` carry the `PKG_NAME` token and are
/// the personalizer's substitution targets. The other files must stay free
/// of `$`-style references, since every reference in a substitution target is
/// expanded, and only the two listed files are rewritten at all.
const BUILTIN_FILES: &[(&str, &str)] = &[
    (
        "setup.py",
        r#"from setuptools import setup, find_packages

setup(
    name='${PKG_NAME}',
    version='0.1.0',
    package_dir={'': 'src'},
    packages=find_packages(where='src'),
    entry_points={
        'console_scripts': [
            '${PKG_NAME} = ${PKG_NAME}.cli:main',
        ],
    },
)
"#,
    ),
    (
        "src/pkg_name/__init__.py",
        "",
    ),
    (
        "src/pkg_name/cli.py",
        r#"'''Command-line entry point for ${PKG_NAME}.'''


def main():
    print('Hello from ${PKG_NAME}!')


if __name__ == '__main__':
    main()
"#,
    ),
    (
        "README.md",
        "# New project\n\nGenerated by skel.\n",
    ),
    (
        ".gitignore",
        "__pycache__/\n*.egg-info/\nbuild/\ndist/\n.venv/\n",
    ),
];

/// Write the embedded skeleton under `root` if it is not already there.
///
/// Returns the template root (`<root>/default`). Already-provisioned trees
/// are left untouched so user edits survive.
#[instrument(skip(filesystem))]
pub fn ensure_builtin_template(filesystem: &dyn Filesystem, root: &Path) -> SkelResult<PathBuf> {
    let template_root = root.join("default");
    if filesystem.exists(&template_root) {
        debug!(path = %template_root.display(), "builtin template already provisioned");
        return Ok(template_root);
    }

    for (relative, content) in BUILTIN_FILES {
        let path = template_root.join(relative);
        if let Some(parent) = path.parent() {
            filesystem.create_dir_all(parent)?;
        }
        filesystem.write_file(&path, content)?;
    }

    info!(path = %template_root.display(), "builtin template provisioned");
    Ok(template_root)
}

/// Resolve the template tree for this run, following the documented order.
///
/// `provision_root` is where the embedded skeleton is written when no other
/// candidate matches (the CLI passes the user cache directory).
pub fn resolve_template_root(
    filesystem: &dyn Filesystem,
    explicit: Option<&Path>,
    provision_root: &Path,
) -> SkelResult<PathBuf> {
    if let Some(path) = explicit {
        if !filesystem.exists(path) {
            return Err(ApplicationError::MissingTemplateAsset {
                path: path.to_path_buf(),
            }
            .into());
        }
        debug!(path = %path.display(), "using explicit template dir");
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from) {
        if !filesystem.exists(&path) {
            return Err(ApplicationError::MissingTemplateAsset { path }.into());
        }
        debug!(path = %path.display(), "using {TEMPLATES_DIR_ENV}");
        return Ok(path);
    }

    if let Some(path) = exe_sibling_template() {
        if filesystem.exists(&path) {
            debug!(path = %path.display(), "using executable-sibling template dir");
            return Ok(path);
        }
    }

    ensure_builtin_template(filesystem, provision_root)
}

fn exe_sibling_template() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()?
        .parent()
        .map(|dir| dir.join("templates").join("default"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;

    #[test]
    fn provisioning_writes_placeholder_layout() {
        let fs = MemoryFilesystem::new();
        let root = ensure_builtin_template(&fs, Path::new("/cache")).unwrap();

        assert_eq!(root, PathBuf::from("/cache/default"));
        assert!(fs.exists(&root.join("setup.py")));
        assert!(fs.exists(&root.join("src/pkg_name/cli.py")));
        assert!(fs.exists(&root.join("src/pkg_name/__init__.py")));
    }

    #[test]
    fn provisioning_is_idempotent() {
        let fs = MemoryFilesystem::new();
        let root = ensure_builtin_template(&fs, Path::new("/cache")).unwrap();
        fs.add_file(root.join("setup.py"), "user edited");

        ensure_builtin_template(&fs, Path::new("/cache")).unwrap();
        assert_eq!(fs.read_file(&root.join("setup.py")).as_deref(), Some("user edited"));
    }

    #[test]
    fn substitution_targets_carry_the_token() {
        let setup = BUILTIN_FILES.iter().find(|(p, _)| *p == "setup.py").unwrap();
        let cli = BUILTIN_FILES
            .iter()
            .find(|(p, _)| *p == "src/pkg_name/cli.py")
            .unwrap();
        assert!(setup.1.contains("${PKG_NAME}"));
        assert!(cli.1.contains("${PKG_NAME}"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let fs = MemoryFilesystem::new();
        let err = resolve_template_root(&fs, Some(Path::new("/nope")), Path::new("/cache"))
            .unwrap_err();
        assert!(matches!(
            err,
            skel_core::error::SkelError::Application(
                ApplicationError::MissingTemplateAsset { .. }
            )
        ));
    }

    #[test]
    fn explicit_existing_path_wins() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("/my/templates");
        let root =
            resolve_template_root(&fs, Some(Path::new("/my/templates")), Path::new("/cache"))
                .unwrap();
        assert_eq!(root, PathBuf::from("/my/templates"));
    }
}
