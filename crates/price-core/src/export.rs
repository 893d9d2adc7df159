//! HTML export of the aggregated price table

use crate::error::Result;
use crate::record::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const HEADER: [&str; 6] = ["Index", "Name", "Price", "Weight", "File", "Unit Price"];

/// Render records as a standalone HTML document with a single table
pub fn render_html(records: &[Record]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>Product positions</title>\n</head>\n<body>\n    <table>\n        <tr>\n",
    );
    for title in HEADER {
        html.push_str(&format!("            <th>{}</th>\n", title));
    }
    html.push_str("        </tr>\n");

    for (idx, record) in records.iter().enumerate() {
        html.push_str("        <tr>\n");
        let cells = [
            (idx + 1).to_string(),
            escape_html(&record.name),
            format!("{:?}", record.price),
            format!("{:?}", record.weight),
            escape_html(&record.source_file),
            format!("{:.2}", record.unit_price),
        ];
        for cell in cells {
            html.push_str(&format!("            <td>{}</td>\n", cell));
        }
        html.push_str("        </tr>\n");
    }

    html.push_str("    </table>\n</body>\n</html>\n");
    html
}

/// Write records as HTML to `path`, replacing any existing file
pub fn export_html<P: AsRef<Path>>(records: &[Record], path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_html(records).as_bytes())?;
    writer.flush()?;

    log::info!("exported {} row(s) to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

/// Escape text for use inside HTML element content
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_table_has_header_only() {
        let html = render_html(&[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<th>").count(), 6);
        assert!(html.contains("<th>Unit Price</th>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn test_rows_numbered_and_formatted() {
        let records = vec![
            Record::new("гречка", 100.0, 3.0, "price_0.csv"),
            Record::new("рис", 90.0, 1.0, "price_1.csv"),
        ];
        let html = render_html(&records);

        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("<td>гречка</td>"));
        assert!(html.contains("<td>33.33</td>"));
        assert!(html.contains("<td>90.00</td>"));
        assert!(html.contains("<td>90.0</td>"));
        assert!(html.contains("<td>3.0</td>"));
        assert!(html.contains("<td>price_1.csv</td>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let records = vec![Record::new("Сыр <Рокфор> & co", 10.0, 1.0, "price_0.csv")];
        let html = render_html(&records);
        assert!(html.contains("<td>Сыр &lt;Рокфор&gt; &amp; co</td>"));
    }

    #[test]
    fn test_export_overwrites_and_is_stable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.html");
        std::fs::write(&path, "stale").unwrap();

        let records = vec![Record::new("молоко", 80.0, 1.0, "price_0.csv")];
        let written = export_html(&records, &path).unwrap();
        assert_eq!(written, path);

        let first = std::fs::read(&path).unwrap();
        export_html(&records, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert!(String::from_utf8(first).unwrap().contains("молоко"));
    }
}
