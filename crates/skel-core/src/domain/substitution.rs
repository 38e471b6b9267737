//! Placeholder token substitution.
//!
//! Template files reference the project name with an env-style token,
//! `${PKG_NAME}` or `$PKG_NAME`. Substitution is a pure function over the
//! file content; no process-wide environment variable is ever set.

use std::path::PathBuf;

/// The placeholder token name referenced inside template files.
pub const PKG_NAME_TOKEN: &str = "PKG_NAME";

/// Relative path of the placeholder package directory inside a template.
pub const PLACEHOLDER_DIR: &str = "src/pkg_name";

/// The fixed list of files rewritten during personalization, relative to
/// the staging root.
///
/// Paths reference the *renamed* package directory, so the rename step must
/// run before these are resolved.
pub fn substitution_targets(package_name: &str) -> [PathBuf; 2] {
    [
        PathBuf::from("setup.py"),
        PathBuf::from("src").join(package_name).join("cli.py"),
    ]
}

/// Replace every `${PKG_NAME}` and `$PKG_NAME` reference with the literal
/// project name.
///
/// Only the `PKG_NAME` token is expanded. A bare `$PKG_NAME` is recognised
/// only when not followed by another identifier character, so `$PKG_NAMES`
/// or `$PKG_NAME_SUFFIX` reference different (unknown) variables and pass
/// through untouched, as does any other `$VAR`.
pub fn expand_pkg_name(content: &str, package_name: &str) -> String {
    let braced = format!("${{{PKG_NAME_TOKEN}}}");
    let bare = format!("${PKG_NAME_TOKEN}");

    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with(&braced) {
            out.push_str(package_name);
            rest = &tail[braced.len()..];
        } else if tail.starts_with(&bare) && !continues_identifier(&tail[bare.len()..]) {
            out.push_str(package_name);
            rest = &tail[bare.len()..];
        } else {
            out.push('$');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

fn continues_identifier(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braced_token_is_replaced() {
        assert_eq!(expand_pkg_name("name='${PKG_NAME}',", "myapp"), "name='myapp',");
    }

    #[test]
    fn bare_token_is_replaced() {
        assert_eq!(expand_pkg_name("import $PKG_NAME.core", "myapp"), "import myapp.core");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let content = "${PKG_NAME} $PKG_NAME ${PKG_NAME}";
        assert_eq!(expand_pkg_name(content, "x"), "x x x");
    }

    #[test]
    fn token_at_end_of_content() {
        assert_eq!(expand_pkg_name("pkg=$PKG_NAME", "myapp"), "pkg=myapp");
    }

    #[test]
    fn longer_identifier_is_not_our_token() {
        // $PKG_NAME_SUFFIX is a different variable; leave it alone.
        let content = "$PKG_NAME_SUFFIX and $PKG_NAMES";
        assert_eq!(expand_pkg_name(content, "x"), content);
    }

    #[test]
    fn other_variables_pass_through() {
        let content = "$HOME ${PATH} $1";
        assert_eq!(expand_pkg_name(content, "x"), content);
    }

    #[test]
    fn lone_dollar_is_preserved() {
        assert_eq!(expand_pkg_name("costs $5 $", "x"), "costs $5 $");
    }

    #[test]
    fn targets_reference_renamed_package() {
        let [setup, cli] = substitution_targets("myapp");
        assert_eq!(setup, PathBuf::from("setup.py"));
        assert_eq!(cli, PathBuf::from("src/myapp/cli.py"));
    }
}
