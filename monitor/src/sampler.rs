//! Directory sampling.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{MonitorError, Result};
use crate::marker;
use crate::state::ObservedState;

/// List `dir` and collect the markers signaled by its entries.
///
/// The last `.`-separated component of each entry name is looked up in the
/// marker catalog; a name without a dot is looked up as a whole. Entries are
/// visited in file name order so the result does not depend on the
/// platform's listing order.
pub fn sample(dir: &Path) -> Result<ObservedState> {
    let io_error = |source| MonitorError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort_unstable();

    let markers = names
        .iter()
        .filter_map(|name| {
            let extension = name.rsplit('.').next().unwrap_or(name);
            let found = marker::lookup(extension);
            if let Some(marker) = found {
                trace!(file = %name, marker = marker.name, "Found marker");
            }
            found
        })
        .collect();

    Ok(ObservedState::new(markers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tempfile::TempDir;

    fn names(state: &ObservedState) -> Vec<&'static str> {
        state.markers().iter().map(|m| m.name).collect()
    }

    #[test]
    fn test_sample_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let state = sample(temp_dir.path()).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_sample_skips_unknown_extensions() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("app.txt")).unwrap();
        File::create(temp_dir.path().join("app.deployed")).unwrap();

        let state = sample(temp_dir.path()).unwrap();
        assert_eq!(names(&state), vec!["Deployed"]);
    }

    #[test]
    fn test_sample_uses_final_extension() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("app.war")).unwrap();
        File::create(temp_dir.path().join("app.war.failed")).unwrap();
        File::create(temp_dir.path().join("app.failed.bak")).unwrap();

        let state = sample(temp_dir.path()).unwrap();
        assert_eq!(names(&state), vec!["Failed"]);
    }

    #[test]
    fn test_sample_name_without_dot() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("pending")).unwrap();

        let state = sample(temp_dir.path()).unwrap();
        assert_eq!(names(&state), vec!["Pending"]);
    }

    #[test]
    fn test_sample_keeps_duplicates_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("b.war.isdeploying")).unwrap();
        File::create(temp_dir.path().join("a.war.deployed")).unwrap();
        File::create(temp_dir.path().join("c.war.deployed")).unwrap();

        let state = sample(temp_dir.path()).unwrap();
        assert_eq!(names(&state), vec!["Deployed", "IsDeploying", "Deployed"]);
    }

    #[test]
    fn test_sample_twice_is_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("app.war.skipdeploy")).unwrap();
        File::create(temp_dir.path().join("app.war.undeployed")).unwrap();

        let first = sample(temp_dir.path()).unwrap();
        let second = sample(temp_dir.path()).unwrap();
        for comparison in [
            crate::state::StateComparison::Ordered,
            crate::state::StateComparison::Unordered,
        ] {
            assert!(!crate::state::has_changed(&first, &second, comparison));
        }
    }

    #[test]
    fn test_sample_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");

        let err = sample(&missing).unwrap_err();
        assert!(matches!(err, MonitorError::Io { ref path, .. } if path == &missing));
    }
}
