//! Lexical checks for manifest paths

use crate::error::{ProvisionError, Result};
use std::path::{Component, Path};

/// Reject paths that are absolute, empty, or climb above the project root
///
/// The check is lexical: `a/../b` is fine, `a/../../b` is not. Symlinks are
/// not followed.
pub fn ensure_inside_root(key: &'static str, path: &Path) -> Result<()> {
    let invalid = || ProvisionError::ManifestInvalidPath {
        key,
        value: path.display().to_string(),
    };

    if path.as_os_str().is_empty() {
        return Err(invalid());
    }

    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return Err(invalid()),
            Component::CurDir => {}
            Component::ParentDir => depth = depth.checked_sub(1).ok_or_else(invalid)?,
            Component::Normal(_) => depth += 1,
        }
    }
    Ok(())
}

/// Normalized `Normal` components of a root-relative path
fn segments(path: &Path) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => out.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                out.pop();
            }
            _ => {}
        }
    }
    out
}

/// Relative ES module specifier that imports `target` from a file in `from_dir`
///
/// Both paths are relative to the project root. The result always starts with
/// `./` or `../` and uses forward slashes.
pub fn module_specifier(from_dir: &Path, target: &Path) -> String {
    let from = segments(from_dir);
    let to = segments(target);

    let shared = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    let ups = from.len() - shared;

    let mut parts: Vec<&str> = Vec::with_capacity(ups + to.len() - shared);
    if ups == 0 {
        parts.push(".");
    } else {
        parts.extend(std::iter::repeat("..").take(ups));
    }
    parts.extend(to[shared..].iter().map(String::as_str));
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_accepted() {
        assert!(ensure_inside_root("componentDir", Path::new("src/components/ui")).is_ok());
        assert!(ensure_inside_root("componentDir", Path::new("./src")).is_ok());
        assert!(ensure_inside_root("componentDir", Path::new("src/../lib")).is_ok());
        assert!(ensure_inside_root("componentDir", Path::new(".")).is_ok());
    }

    #[test]
    fn test_escaping_paths_rejected() {
        assert!(ensure_inside_root("utilsDir", Path::new("../outside")).is_err());
        assert!(ensure_inside_root("utilsDir", Path::new("src/../../x")).is_err());
        assert!(ensure_inside_root("utilsDir", Path::new("/etc")).is_err());
        assert!(ensure_inside_root("utilsDir", Path::new("")).is_err());
    }

    #[test]
    fn test_module_specifier_sibling_tree() {
        assert_eq!(
            module_specifier(Path::new("src/components/ui"), Path::new("src/lib/utils")),
            "../../lib/utils"
        );
    }

    #[test]
    fn test_module_specifier_same_dir() {
        assert_eq!(
            module_specifier(Path::new("src/lib"), Path::new("src/lib/utils")),
            "./utils"
        );
    }

    #[test]
    fn test_module_specifier_normalizes() {
        assert_eq!(
            module_specifier(Path::new("./src/ui"), Path::new("./lib/utils")),
            "../../lib/utils"
        );
    }
}
