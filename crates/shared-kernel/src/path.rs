use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// `.` segments are dropped and `..` segments collapse lexically, so the result
/// names the same directory entry the caller typed even when it is a symlink.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    normalize_lexically(&joined)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // never pop past the root / prefix
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Containing directory as a display string; empty when the path has no parent.
pub fn parent_display(path: &Path) -> String {
    path.parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn collapses_dot_segments() {
        assert_eq!(logical_absolute(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(logical_absolute(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn relative_paths_become_absolute() {
        assert!(logical_absolute(Path::new("some/file.txt")).is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn root_has_no_parent() {
        assert_eq!(parent_display(Path::new("/")), "");
        assert_eq!(parent_display(Path::new("/var/log")), "/var");
    }
}
