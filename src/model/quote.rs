//! Quote data model and author normalization

use serde::Deserialize;

/// Suffix the type.fit API appends to some author fields
pub const AUTHOR_SUFFIX: &str = ", type.fit";

/// Placeholder for quotes with a missing or null author
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Label for the unfiltered author selection
pub const ALL_AUTHORS: &str = "All Authors";

/// A quote as decoded from the source list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Quote {
    pub fn new(text: &str, author: &str) -> Self {
        Self {
            text: text.to_string(),
            author: Some(author.to_string()),
        }
    }

    /// The author field as it came off the wire, empty when absent
    pub fn raw_author(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    /// Author as shown to the user: suffix stripped, null/absent mapped
    /// to "Unknown"
    pub fn display_author(&self) -> String {
        normalize_author(self.author.as_deref())
    }
}

/// Strip the API suffix and map null/empty authors to "Unknown"
pub fn normalize_author(raw: Option<&str>) -> String {
    let stripped = raw.unwrap_or("").replace(AUTHOR_SUFFIX, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() || trimmed == "null" {
        UNKNOWN_AUTHOR.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Filter applied when generating a random quote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorFilter {
    #[default]
    All,
    Author(String),
}

impl AuthorFilter {
    /// Label shown in the filter dialog and the info box
    pub fn label(&self) -> &str {
        match self {
            AuthorFilter::All => ALL_AUTHORS,
            AuthorFilter::Author(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, AuthorFilter::All)
    }
}

/// The fixed list used when the remote source is unreachable
const FALLBACK: [(&str, &str); 5] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "In the middle of difficulty lies opportunity.",
        "Albert Einstein",
    ),
    (
        "Success is not final, failure is not fatal: It is the courage to continue that counts.",
        "Winston Churchill",
    ),
];

/// Build the fallback quote list
pub fn fallback_quotes() -> Vec<Quote> {
    FALLBACK
        .iter()
        .map(|(text, author)| Quote::new(text, author))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quote_with_author() {
        let quote: Quote =
            serde_json::from_str(r#"{"text": "T", "author": "Steve Jobs, type.fit"}"#).unwrap();
        assert_eq!(quote.text, "T");
        assert_eq!(quote.display_author(), "Steve Jobs");
        assert_eq!(quote.raw_author(), "Steve Jobs, type.fit");
    }

    #[test]
    fn test_decode_quote_with_null_author() {
        let quote: Quote = serde_json::from_str(r#"{"text": "T", "author": null}"#).unwrap();
        assert_eq!(quote.display_author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_decode_quote_with_missing_fields() {
        let quote: Quote = serde_json::from_str("{}").unwrap();
        assert_eq!(quote.text, "");
        assert_eq!(quote.display_author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_normalize_author() {
        assert_eq!(normalize_author(Some("John Lennon")), "John Lennon");
        assert_eq!(normalize_author(Some("John Lennon, type.fit")), "John Lennon");
        assert_eq!(normalize_author(Some("null")), UNKNOWN_AUTHOR);
        assert_eq!(normalize_author(Some("")), UNKNOWN_AUTHOR);
        assert_eq!(normalize_author(None), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_fallback_list_has_five_entries() {
        let quotes = fallback_quotes();
        assert_eq!(quotes.len(), 5);
        assert!(quotes.iter().all(|q| !q.text.is_empty()));
        assert_eq!(quotes[0].display_author(), "Steve Jobs");
    }

    #[test]
    fn test_author_filter_labels() {
        assert_eq!(AuthorFilter::All.label(), "All Authors");
        assert_eq!(
            AuthorFilter::Author("Dalai Lama".to_string()).label(),
            "Dalai Lama"
        );
        assert!(AuthorFilter::All.is_all());
        assert!(!AuthorFilter::Author("x".to_string()).is_all());
    }
}
