//! price-core: Core library for aggregating product price lists
//!
//! This library provides functionality to:
//! - Scan a directory tree for price files matching a file mask
//! - Resolve which columns hold the product name, price and weight
//! - Parse price files into records with a derived unit price
//! - Merge all records into one list sorted by unit price
//! - Search product names and export the list as an HTML table

pub mod config;
pub mod error;
pub mod export;
pub mod headers;
pub mod parser;
pub mod record;
pub mod scanner;
pub mod search;
pub mod session;
pub mod store;

pub use config::{PriceConfig, DEFAULT_MASK, DEFAULT_OUTPUT};
pub use error::{Error, Result};
pub use export::{export_html, render_html};
pub use headers::{resolve_headers, ColumnMap, Role, Synonyms};
pub use parser::{read_price_file, read_price_str, FileLoad};
pub use record::Record;
pub use scanner::{find_price_files, ScanResult};
pub use search::{find_text, render_hits, SearchHit, SearchResult};
pub use session::{parse_command, run_session, Command, SessionSummary};
pub use store::{FileIssue, LoadReport, PriceList};
