//! Directory scanner for discovering price files

use crate::error::Result;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a directory tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Matching files, sorted by path
    pub files: Vec<PathBuf>,
    /// Total number of files found
    pub total_files: usize,
}

impl ScanResult {
    /// Whether no file matched the mask
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Recursively collect files under `root` whose file name matches `file_mask`.
///
/// The mask supports shell wildcards (`*`, `?`, `[seq]`) and is matched
/// against the file name only, never the directory part. A missing or
/// unreadable root yields an empty result.
pub fn find_price_files<P: AsRef<Path>>(root: P, file_mask: &str) -> Result<ScanResult> {
    let root = root.as_ref();
    let pattern = Pattern::new(file_mask)?;

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| pattern.matches(name))
        })
        .map(|e| e.into_path())
        .collect();

    files.sort();

    let total_files = files.len();
    log::info!(
        "found {} file(s) matching '{}' under {}",
        total_files,
        file_mask,
        root.display()
    );

    Ok(ScanResult {
        root: root.to_path_buf(),
        files,
        total_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "название,цена,вес\n").unwrap();
    }

    #[test]
    fn test_finds_nested_matches_sorted() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("price_2.csv"));
        touch(&dir.path().join("sub/price_1.csv"));
        touch(&dir.path().join("sub/deeper/price_0.csv"));
        touch(&dir.path().join("notes.csv"));

        let result = find_price_files(dir.path(), "price*.csv").unwrap();

        assert_eq!(result.total_files, 3);
        let mut expected = vec![
            dir.path().join("price_2.csv"),
            dir.path().join("sub/price_1.csv"),
            dir.path().join("sub/deeper/price_0.csv"),
        ];
        expected.sort();
        assert_eq!(result.files, expected);
    }

    #[test]
    fn test_mask_applies_to_file_name_only() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("price_dir/list.csv"));

        let result = find_price_files(dir.path(), "price*.csv").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_question_mark_and_sequence() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("price_1.csv"));
        touch(&dir.path().join("price_2.csv"));
        touch(&dir.path().join("price_10.csv"));

        let result = find_price_files(dir.path(), "price_[1].csv").unwrap();
        assert_eq!(result.files, vec![dir.path().join("price_1.csv")]);

        let result = find_price_files(dir.path(), "price_?.csv").unwrap();
        assert_eq!(result.total_files, 2);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let result = find_price_files(dir.path().join("absent"), "*.csv").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_mask() {
        let dir = tempdir().unwrap();
        assert!(find_price_files(dir.path(), "price[.csv").is_err());
    }
}
