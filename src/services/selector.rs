//! Author extraction, filtering, and random selection

use crate::model::category::Category;
use crate::model::quote::{normalize_author, AuthorFilter, Quote, UNKNOWN_AUTHOR};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Distinct normalized authors for the filter dialog, sorted.
/// Unknown, "null", and empty authors are excluded.
pub fn available_authors(quotes: &[Quote]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    for quote in quotes {
        let author = normalize_author(quote.author.as_deref());
        if author != UNKNOWN_AUTHOR {
            seen.insert(author);
        }
    }
    let mut authors: Vec<String> = seen.into_iter().collect();
    authors.sort();
    authors
}

/// Quotes matching the author filter; identity for `AuthorFilter::All`,
/// otherwise an exact match on the normalized author
pub fn filter_by_author<'a>(quotes: &'a [Quote], filter: &AuthorFilter) -> Vec<&'a Quote> {
    match filter {
        AuthorFilter::All => quotes.iter().collect(),
        AuthorFilter::Author(author) => quotes
            .iter()
            .filter(|q| normalize_author(q.author.as_deref()) == *author)
            .collect(),
    }
}

/// Quotes whose raw author field contains the category's author name
pub fn filter_by_category(quotes: &[Quote], category: Category) -> Vec<&Quote> {
    quotes
        .iter()
        .filter(|q| q.raw_author().contains(category.author()))
        .collect()
}

/// Uniform random pick over the filtered set; `None` when it is empty
pub fn pick_random<'a>(quotes: &[&'a Quote], rng: &mut impl Rng) -> Option<&'a Quote> {
    quotes.choose(rng).copied()
}
