use std::path::{Component, Path, PathBuf};

/// File read from the working directory.
pub const CONFIG_FILE_NAME: &str = "firestore.json";
/// File written to the working directory.
pub const JOBS_FILE_NAME: &str = "guild_jobs.json";

/// Lexically normalizes a path: drops `.` components and folds `..` into
/// the preceding component. The filesystem is not consulted, so symlinks
/// are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drop_current_dir_components() {
        assert_eq!(normalize(Path::new("./data/./acc")), PathBuf::from("data/acc"));
    }

    #[test]
    fn should_fold_parent_dir_components() {
        assert_eq!(
            normalize(Path::new("/srv/accounts/../data/acc/")),
            PathBuf::from("/srv/data/acc")
        );
    }

    #[test]
    fn should_keep_leading_parent_dirs_of_relative_path() {
        assert_eq!(normalize(Path::new("../../acc")), PathBuf::from("../../acc"));
    }

    #[test]
    fn should_not_climb_above_root() {
        assert_eq!(normalize(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn should_normalize_empty_result_to_current_dir() {
        assert_eq!(normalize(Path::new("acc/..")), PathBuf::from("."));
    }
}
