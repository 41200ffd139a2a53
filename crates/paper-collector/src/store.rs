//! On-disk snapshots of the working set.
//!
//! Snapshots are a pretty-printed JSON array of paper objects with a fixed
//! key order, so successive snapshots diff cleanly. Saving writes to a
//! sibling temp file and renames it into place.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::CollectResult;
use crate::models::WorkingSet;

/// Serialize the working set to `path`, creating parent directories as needed.
pub fn save(set: &WorkingSet, path: &Path) -> CollectResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(set)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!(path = %path.display(), papers = set.len(), "saved snapshot");
    Ok(())
}

/// Load a working set from a snapshot written by [`save`].
pub fn load(path: &Path) -> CollectResult<WorkingSet> {
    let json = fs::read_to_string(path)?;
    let set: WorkingSet = serde_json::from_str(&json)?;

    info!(path = %path.display(), papers = set.len(), "loaded snapshot");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExternalIds, Paper};
    use crate::normalize;

    fn sample_set() -> WorkingSet {
        let mut papers = vec![
            Paper {
                paper_id: Some("p1".to_string()),
                title: Some("First".to_string()),
                year: Some(2020),
                external_ids: Some(ExternalIds {
                    doi: Some("10.1/first".to_string()),
                    ..ExternalIds::default()
                }),
                ..Paper::default()
            },
            Paper { paper_id: Some("p2".to_string()), ..Paper::default() },
        ];
        normalize::normalize_all(&mut papers);
        papers.into()
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.json");

        let set = sample_set();
        save(&set, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, set);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/output/papers.json");

        save(&WorkingSet::new(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.json");

        save(&sample_set(), &path).unwrap();
        save(&WorkingSet::new(), &path).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(crate::error::CollectError::Io(_))));
    }
}
