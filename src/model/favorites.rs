//! Favorites store - the ordered list of saved quotes
//!
//! Session-lifetime only: the list lives as long as the process and is never
//! persisted, apart from the one-shot CSV export.

use crate::model::quote::Quote;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name offered for the CSV export
pub const EXPORT_FILE_NAME: &str = "favorite_quotes.csv";

/// Timestamp format used on saved quotes
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A quote saved to favorites, stamped at save time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedQuote {
    pub text: String,
    pub author: String,
    pub timestamp: String,
}

impl SavedQuote {
    /// Capture the given quote with the current local time.
    /// The author is normalized here so favorites never carry the API suffix.
    pub fn capture(quote: &Quote) -> Self {
        Self {
            text: quote.text.clone(),
            author: quote.display_author(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Ordered list of saved quotes, unique by structural equality
#[derive(Debug, Default)]
pub struct FavoritesList {
    entries: Vec<SavedQuote>,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append unless an identical entry is already present.
    /// Returns whether the quote was added.
    pub fn add(&mut self, quote: SavedQuote) -> bool {
        if self.entries.contains(&quote) {
            return false;
        }
        self.entries.push(quote);
        true
    }

    /// Remove the entry at the given position; out-of-range is a no-op
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Empty the list unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SavedQuote] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SavedQuote> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the list as CSV in current order, header row included
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for entry in &self.entries {
            writer
                .serialize(entry)
                .context("Failed to serialize favorite as CSV")?;
        }
        writer
            .into_inner()
            .map_err(|e| anyhow!("Failed to finish CSV export: {}", e))
    }

    /// Write the CSV export as `favorite_quotes.csv` under the given
    /// directory, returning the full path
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(EXPORT_FILE_NAME);
        let data = self.to_csv()?;
        fs::write(&path, data)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(text: &str, author: &str, timestamp: &str) -> SavedQuote {
        SavedQuote {
            text: text.to_string(),
            author: author.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_add_rejects_exact_duplicate() {
        let mut favorites = FavoritesList::new();
        let quote = saved("T", "A", "2024-01-01 00:00:00");

        assert!(favorites.add(quote.clone()));
        assert!(!favorites.add(quote));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_add_accepts_same_text_different_timestamp() {
        let mut favorites = FavoritesList::new();
        assert!(favorites.add(saved("T", "A", "2024-01-01 00:00:00")));
        assert!(favorites.add(saved("T", "A", "2024-01-01 00:00:01")));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_remove_by_position() {
        let mut favorites = FavoritesList::new();
        favorites.add(saved("first", "A", "2024-01-01 00:00:00"));
        favorites.add(saved("second", "B", "2024-01-01 00:00:01"));

        favorites.remove(0);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.get(0).unwrap().text, "second");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut favorites = FavoritesList::new();
        favorites.add(saved("T", "A", "2024-01-01 00:00:00"));

        favorites.remove(5);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_clear_empties_list() {
        let mut favorites = FavoritesList::new();
        favorites.add(saved("T", "A", "2024-01-01 00:00:00"));
        favorites.add(saved("U", "B", "2024-01-01 00:00:01"));

        favorites.clear();
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_csv_has_header_and_rows_in_order() {
        let mut favorites = FavoritesList::new();
        favorites.add(saved("one", "A", "2024-01-01 00:00:00"));
        favorites.add(saved("two", "B", "2024-01-01 00:00:01"));
        favorites.add(saved("three", "C", "2024-01-01 00:00:02"));

        let csv = String::from_utf8(favorites.to_csv().unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "text,author,timestamp");
        assert!(lines[1].starts_with("one,A,"));
        assert!(lines[2].starts_with("two,B,"));
        assert!(lines[3].starts_with("three,C,"));
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let mut favorites = FavoritesList::new();
        favorites.add(saved(
            "Success is not final, failure is not fatal",
            "Winston Churchill",
            "2024-01-01 00:00:00",
        ));

        let csv = String::from_utf8(favorites.to_csv().unwrap()).unwrap();
        assert!(csv.contains("\"Success is not final, failure is not fatal\""));
    }

    #[test]
    fn test_removed_entry_never_exported() {
        let mut favorites = FavoritesList::new();
        favorites.add(saved("keep", "A", "2024-01-01 00:00:00"));
        favorites.add(saved("drop", "B", "2024-01-01 00:00:01"));

        favorites.remove(1);
        let csv = String::from_utf8(favorites.to_csv().unwrap()).unwrap();
        assert!(csv.contains("keep"));
        assert!(!csv.contains("drop"));
    }

    #[test]
    fn test_capture_normalizes_author() {
        let quote = Quote::new("T", "Steve Jobs, type.fit");
        let saved = SavedQuote::capture(&quote);
        assert_eq!(saved.author, "Steve Jobs");
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(saved.timestamp.len(), 19);
    }
}
