//! Author list model.
//!
//! The result of one normalization call: the clean names in input order
//! plus counters describing what the pipeline discarded.

use crate::error::Result;
use crate::options::LinkOptions;
use serde::{Deserialize, Serialize};

/// Clean author names extracted from one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorList {
    /// Clean names, in order of first appearance
    pub authors: Vec<String>,
    /// Pipeline counters
    pub stats: ExtractionStats,
}

/// Counters collected while extracting names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Candidates produced by splitting on separators
    pub candidates: usize,
    /// Candidates dropped by the length filter
    pub discarded: usize,
}

impl ExtractionStats {
    /// Number of candidates that survived.
    pub fn kept(&self) -> usize {
        self.candidates.saturating_sub(self.discarded)
    }
}

impl AuthorList {
    /// Creates an author list from already-clean names.
    pub fn new(authors: Vec<String>) -> Self {
        let stats = ExtractionStats {
            candidates: authors.len(),
            discarded: 0,
        };
        Self { authors, stats }
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Returns true if no name survived.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Returns an iterator over the names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.authors.iter().map(String::as_str)
    }

    /// Returns the names as a slice.
    pub fn names(&self) -> &[String] {
        &self.authors
    }

    /// Consumes self and returns the names.
    pub fn into_names(self) -> Vec<String> {
        self.authors
    }

    /// Renders the names as a link list.
    pub fn to_links(&self, options: &LinkOptions) -> String {
        crate::render::render_links(self.authors.as_slice(), options)
    }

    /// Serializes the list as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the list as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl IntoIterator for AuthorList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.authors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_list_new() {
        let list = AuthorList::new(vec!["John Doe".into(), "Jane Smith".into()]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.stats.candidates, 2);
        assert_eq!(list.stats.kept(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), ["John Doe", "Jane Smith"]);
    }

    #[test]
    fn test_author_list_empty() {
        let list = AuthorList::default();
        assert!(list.is_empty());
        assert_eq!(list.to_links(&LinkOptions::default()), "");
    }

    #[test]
    fn test_author_list_json() {
        let list = AuthorList {
            authors: vec!["山田 太郎".into()],
            stats: ExtractionStats {
                candidates: 3,
                discarded: 2,
            },
        };

        let json = list.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"authors":["山田 太郎"],"stats":{"candidates":3,"discarded":2}}"#
        );

        let parsed: AuthorList = serde_json::from_str(&list.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn test_stats_kept_saturates() {
        let stats = ExtractionStats {
            candidates: 1,
            discarded: 4,
        };
        assert_eq!(stats.kept(), 0);
    }
}
