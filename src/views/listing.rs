//! Bucket listing view model

use askama::Template;
use chrono::{DateTime, Utc};

use crate::storage::ObjectEntry;

/// Individual object row for display
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub key: String,
    pub href: String,
    pub size_text: String,
    pub modified_text: String,
}

impl From<ObjectEntry> for EntryRow {
    fn from(entry: ObjectEntry) -> Self {
        EntryRow {
            href: format!("/{}", entry.key),
            size_text: format_size(entry.size),
            modified_text: format_modified(entry.last_modified),
            key: entry.key,
        }
    }
}

/// View model for the listing table, wrapped in the layout template
#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingView {
    pub bucket: String,
    pub entries: Vec<EntryRow>,
}

impl ListingView {
    pub fn new(bucket: impl Into<String>, entries: Vec<ObjectEntry>) -> Self {
        ListingView {
            bucket: bucket.into(),
            entries: entries.into_iter().map(EntryRow::from).collect(),
        }
    }

    pub fn empty(bucket: impl Into<String>) -> Self {
        ListingView {
            bucket: bucket.into(),
            entries: Vec::new(),
        }
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

fn format_modified(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, size: u64) -> ObjectEntry {
        ObjectEntry {
            key: key.to_string(),
            size,
            last_modified: None,
        }
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn row_links_to_key_path() {
        let row = EntryRow::from(entry("dir/report.pdf", 42));
        assert_eq!(row.href, "/dir/report.pdf");
        assert_eq!(row.key, "dir/report.pdf");
    }

    #[test]
    fn rendered_listing_contains_all_keys() {
        let view = ListingView::new("demo", vec![entry("a.txt", 1), entry("b/c.bin", 2)]);
        let html = view.render().unwrap();
        assert!(html.contains("a.txt"));
        assert!(html.contains("b/c.bin"));
        assert!(html.contains("demo"));
    }

    #[test]
    fn rendered_listing_escapes_keys() {
        let view = ListingView::new("demo", vec![entry("<script>.txt", 1)]);
        let html = view.render().unwrap();
        assert!(!html.contains("<script>.txt"));
        assert!(html.contains("&lt;script&gt;.txt"));
    }

    #[test]
    fn empty_listing_renders() {
        let html = ListingView::empty("demo").render().unwrap();
        assert!(html.contains("No objects"));
    }
}
