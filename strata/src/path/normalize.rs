//! Lexical path normalization.
//!
//! Nothing here touches the filesystem: symlinks are not followed and the
//! paths need not exist.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components lexically.
///
/// A `..` at the root stays at the root, so the result never escapes it.
///
/// # Examples
///
/// ```
/// use strata::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if has_root {
                    if result.parent().is_some() {
                        result.pop();
                    }
                } else if matches!(
                    result.components().next_back(),
                    None | Some(Component::ParentDir)
                ) {
                    // Relative path climbing above its start
                    result.push("..");
                } else {
                    result.pop();
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Resolve `path` against `root`.
///
/// Absolute paths pass through unchanged apart from component resolution;
/// relative ones are joined to `root` first.
///
/// # Examples
///
/// ```
/// use strata::path::normalize::resolve_against;
/// use std::path::{Path, PathBuf};
///
/// let root = Path::new("/srv/app");
/// assert_eq!(resolve_against(root, "public"), PathBuf::from("/srv/app/public"));
/// assert_eq!(resolve_against(root, "../shared"), PathBuf::from("/srv/shared"));
/// assert_eq!(resolve_against(root, "/var/www"), PathBuf::from("/var/www"));
/// ```
#[must_use]
pub fn resolve_against(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        resolve_components(path)
    } else {
        resolve_components(&root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_components_simple() {
        assert_eq!(
            resolve_components(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
    }

    #[test]
    fn test_resolve_components_multiple_parent() {
        assert_eq!(
            resolve_components(Path::new("/a/b/../../c")),
            PathBuf::from("/c")
        );
    }

    #[test]
    fn test_resolve_components_root_only() {
        assert_eq!(resolve_components(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_clamps_at_root() {
        assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
        assert_eq!(resolve_components(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_resolve_components_relative_keeps_leading_parents() {
        assert_eq!(
            resolve_components(Path::new("../a/./b")),
            PathBuf::from("../a/b")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_against_root() {
        let root = Path::new("/srv/app");
        assert_eq!(resolve_against(root, "./views/layouts"), PathBuf::from("/srv/app/views/layouts"));
        assert_eq!(resolve_against(root, "/abs/./dir"), PathBuf::from("/abs/dir"));
        assert_eq!(resolve_against(root, "."), PathBuf::from("/srv/app"));
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Paths with . and .. components
        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Resolved absolute paths contain no `.` or `..` components
            #[test]
            fn resolve_removes_dot_components(s in path_with_dots_strategy()) {
                let resolved = resolve_components(Path::new(&s));
                prop_assert!(resolved.is_absolute());
                for component in resolved.components() {
                    prop_assert_ne!(component, Component::CurDir);
                    prop_assert_ne!(component, Component::ParentDir);
                }
            }

            /// Resolution is idempotent
            #[test]
            fn resolve_idempotent(s in path_with_dots_strategy()) {
                let once = resolve_components(Path::new(&s));
                prop_assert_eq!(resolve_components(&once), once.clone());
            }
        }
    }
}
