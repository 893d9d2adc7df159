//! Aggregate store: all price files merged into one table sorted by unit price

use crate::config::PriceConfig;
use crate::error::Result;
use crate::export;
use crate::parser::read_price_file;
use crate::record::Record;
use crate::scanner::find_price_files;
use crate::search::{self, SearchResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file-level failure recorded during a load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileIssue {
    /// File that failed
    pub path: PathBuf,
    /// Error category tag (e.g. "IncorrectHeaders")
    pub category: String,
    /// Human-readable message
    pub message: String,
}

/// Summary of a load pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Files matching the mask
    pub files_found: usize,
    /// Files read to the end without error
    pub files_loaded: usize,
    /// Records collected across all files
    pub rows_loaded: usize,
    /// Files skipped or cut short, in processing order
    pub issues: Vec<FileIssue>,
}

impl LoadReport {
    /// Issue recorded for a given file, if any
    pub fn issue_for(&self, path: &Path) -> Option<&FileIssue> {
        self.issues.iter().find(|i| i.path == path)
    }
}

/// Records from every price file, sorted ascending by unit price
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    records: Vec<Record>,
    report: LoadReport,
}

impl PriceList {
    /// Discover, parse and merge all price files described by `config`.
    ///
    /// Per-file failures are logged and recorded in the report; they never
    /// stop the load. Only an invalid file mask is returned as an error.
    pub fn load(config: &PriceConfig) -> Result<Self> {
        let mut list = Self::default();
        list.reload(config)?;
        Ok(list)
    }

    /// Build a list from already-parsed records
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut list = Self {
            report: LoadReport {
                rows_loaded: records.len(),
                ..LoadReport::default()
            },
            records,
        };
        list.sort();
        list
    }

    /// Clear the list and load it again from disk
    pub fn reload(&mut self, config: &PriceConfig) -> Result<()> {
        self.records.clear();
        self.report = LoadReport::default();

        let scan = find_price_files(&config.root, &config.file_mask)?;
        self.report.files_found = scan.total_files;

        if scan.is_empty() {
            log::warn!(
                "no files matching '{}' found under {}",
                config.file_mask,
                config.root.display()
            );
        }

        for path in &scan.files {
            let load = read_price_file(path, &config.synonyms);
            log::debug!("{}: {} row(s)", path.display(), load.records.len());
            self.records.extend(load.records);

            match load.error {
                None => self.report.files_loaded += 1,
                Some(err) => {
                    log::error!("ERROR {}: {}", err.category(), err);
                    self.report.issues.push(FileIssue {
                        path: path.clone(),
                        category: err.category().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        self.sort();
        self.report.rows_loaded = self.records.len();

        log::info!(
            "loaded {} record(s) from {} of {} file(s)",
            self.report.rows_loaded,
            self.report.files_loaded,
            self.report.files_found
        );

        Ok(())
    }

    fn sort(&mut self) {
        self.records.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
    }

    /// All records in unit price order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Summary of the last load
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over product names
    pub fn find_text(&self, query: &str) -> SearchResult<'_> {
        search::find_text(&self.records, query)
    }

    /// Render the list as an HTML table and write it to `path`
    pub fn export_html<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        export::export_html(&self.records, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records_sorts_by_unit_price() {
        let list = PriceList::from_records(vec![
            Record::new("говядина", 600.0, 1.0, "price_0.csv"),
            Record::new("курица", 250.0, 1.0, "price_1.csv"),
            Record::new("свинина", 700.0, 2.0, "price_0.csv"),
        ]);

        let names: Vec<&str> = list.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["курица", "свинина", "говядина"]);
        assert_eq!(list.report().rows_loaded, 3);
    }

    #[test]
    fn test_equal_unit_prices_keep_input_order() {
        let list = PriceList::from_records(vec![
            Record::new("a", 100.0, 1.0, "price_0.csv"),
            Record::new("b", 200.0, 2.0, "price_0.csv"),
            Record::new("c", 50.0, 0.5, "price_1.csv"),
        ]);

        let names: Vec<&str> = list.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list() {
        let list = PriceList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.report().issues.is_empty());
    }
}
