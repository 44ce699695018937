//! Input path handling
//!
//! Paths given on the command line are made absolute and lexically
//! normalized before use. Symlinks are not resolved, so tagging a link
//! renames the link itself.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Input paths that cannot be tagged
#[derive(Debug, Error)]
pub enum PathError {
    /// Every input path that does not exist
    #[error("The following paths don't exist ({}/{}):{}", .missing.len(), .total, list_paths(.missing))]
    NotFound { missing: Vec<PathBuf>, total: usize },
    /// Path without a final name component, like `/`
    #[error("Path '{}' has no file name", .0.display())]
    NoFileName(PathBuf),
    /// Name that cannot be edited as text
    #[error("File name of '{}' is not valid UTF-8", .0.display())]
    NonUtf8Name(PathBuf),
    /// Current directory could not be determined
    #[error("Cannot resolve '{}': {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn list_paths(paths: &[PathBuf]) -> String {
    let mut out = String::new();
    for (i, path) in paths.iter().enumerate() {
        let _ = write!(out, "\n [{}]: '{}'", i + 1, path.display());
    }
    out
}

/// Expand `~`, make absolute and drop `.`/`..` components.
///
/// # Errors
/// Returns `io::Error` if the current directory cannot be read for a
/// relative path.
pub fn normalize_path(path: &Path) -> io::Result<PathBuf> {
    let expanded = expand_home(path);
    let absolute = std::path::absolute(&expanded)?;
    Ok(lexical_normalize(&absolute))
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Normalize every input path and check that it exists.
///
/// All missing paths are collected and reported together. Duplicates are
/// dropped, keeping the first occurrence.
///
/// # Errors
/// * `PathError::NotFound` listing every missing path, counted against the
///   deduplicated inputs
/// * `PathError::NoFileName` / `PathError::NonUtf8Name` for the first path
///   whose name cannot carry tags, once nothing is missing
/// * `PathError::Resolve` if a relative path cannot be made absolute
pub fn validate_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>, PathError> {
    let mut seen = HashSet::new();
    let mut valid = Vec::with_capacity(paths.len());
    let mut missing = Vec::new();
    let mut unusable = None;

    for raw in paths {
        let path = normalize_path(raw).map_err(|source| PathError::Resolve {
            path: raw.clone(),
            source,
        })?;
        if !seen.insert(path.clone()) {
            continue;
        }
        if path.symlink_metadata().is_err() {
            missing.push(path);
            continue;
        }
        match path.file_name() {
            None => {
                unusable.get_or_insert(PathError::NoFileName(path));
            }
            Some(name) if name.to_str().is_none() => {
                unusable.get_or_insert(PathError::NonUtf8Name(path));
            }
            Some(_) => valid.push(path),
        }
    }

    if !missing.is_empty() {
        return Err(PathError::NotFound {
            missing,
            total: seen.len(),
        });
    }
    match unusable {
        Some(err) => Err(err),
        None => Ok(valid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDir;

    #[test]
    fn test_lexical_normalize() {
        assert_eq!(lexical_normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(lexical_normalize(Path::new("/a/b/c/../../d")), PathBuf::from("/a/d"));
        assert_eq!(lexical_normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(lexical_normalize(Path::new("/a/b/")), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_normalize_relative_path() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize_path(Path::new("x/../y.txt")).unwrap(), cwd.join("y.txt"));
        assert_eq!(normalize_path(Path::new("/abs/./f")).unwrap(), PathBuf::from("/abs/f"));
    }

    #[test]
    fn test_normalize_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_path(Path::new("~/notes.txt")).unwrap(), home.join("notes.txt"));
        }
    }

    #[test]
    fn test_validate_existing_paths() {
        let dir = TestDir::new();
        let a = dir.touch("a.txt");
        let b = dir.touch("b #x.txt");
        let valid = validate_paths(&[a.clone(), b.clone(), a.clone()]).unwrap();
        assert_eq!(valid, [a, b]);
    }

    #[test]
    fn test_validate_collects_all_missing() {
        let dir = TestDir::new();
        let present = dir.touch("here.txt");
        let gone1 = dir.path().join("gone1.txt");
        let gone2 = dir.path().join("gone2.txt");

        let err = validate_paths(&[gone1.clone(), present, gone2.clone()]).unwrap_err();
        match &err {
            PathError::NotFound { missing, total } => {
                assert_eq!(missing, &[gone1.clone(), gone2.clone()]);
                assert_eq!(*total, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let message = err.to_string();
        assert!(message.starts_with("The following paths don't exist (2/3):"));
        assert!(message.contains(&format!(" [1]: '{}'", gone1.display())));
        assert!(message.contains(&format!(" [2]: '{}'", gone2.display())));
    }

    #[test]
    fn test_validate_reports_missing_around_unusable_name() {
        let dir = TestDir::new();
        let gone1 = dir.path().join("gone1.txt");
        let gone2 = dir.path().join("gone2.txt");

        let err = validate_paths(&[gone1.clone(), PathBuf::from("/"), gone2.clone()]).unwrap_err();
        match err {
            PathError::NotFound { missing, total } => {
                assert_eq!(missing, [gone1, gone2]);
                assert_eq!(total, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_total_ignores_duplicates() {
        let dir = TestDir::new();
        let present = dir.touch("here.txt");
        let gone = dir.path().join("gone.txt");

        let err = validate_paths(&[gone.clone(), present.clone(), gone.clone(), present]).unwrap_err();
        assert!(matches!(&err, PathError::NotFound { missing, total: 2 } if missing.len() == 1));
        assert!(err.to_string().starts_with("The following paths don't exist (1/2):"));
    }

    #[test]
    fn test_validate_root_has_no_name() {
        let err = validate_paths(&[PathBuf::from("/")]).unwrap_err();
        assert!(matches!(err, PathError::NoFileName(_)));
    }
}
