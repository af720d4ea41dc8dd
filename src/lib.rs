//! # authorlink
//!
//! Turns the author line of an academic paper, as copied from a PDF or a
//! publisher page, into a clean list of citation links.
//!
//! ```text
//! Author Info & Affiliations Dan R. Pow1,2†, John Smith3 M.D., Jane Doe4 Ph.D. ORCID
//! ```
//!
//! becomes
//!
//! ```text
//! [Dan R. Pow], [John Smith], [Jane Doe]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use authorlink::link_authors;
//!
//! assert_eq!(
//!     link_authors("JOHN DOE1,2†, jane smith* & 山田 太郎"),
//!     "[John Doe], [Jane Smith], [山田 太郎]"
//! );
//! ```
//!
//! ## Features
//!
//! - `ffi`: C-ABI bindings
//! - `python`: Python bindings via pyo3

pub mod cleanup;
pub mod error;
pub mod model;
pub mod options;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "python")]
mod python;

// Re-exports
pub use cleanup::extract_authors;
pub use error::{Error, Result};
pub use model::{AuthorList, ExtractionStats};
pub use options::{LinkOptions, LinkStyle};

use std::path::Path;

/// Normalizes an author list into bracketed links with default options.
///
/// Never fails: input without any usable name yields an empty string.
///
/// # Example
///
/// ```
/// use authorlink::link_authors;
///
/// assert_eq!(link_authors("Alice Smith and Bob Johnson"), "[Alice Smith], [Bob Johnson]");
/// assert_eq!(link_authors("   "), "");
/// ```
pub fn link_authors(input: &str) -> String {
    link_authors_with_options(input, &LinkOptions::default())
}

/// Normalizes an author list into links with custom options.
///
/// # Example
///
/// ```
/// use authorlink::{link_authors_with_options, LinkOptions};
///
/// let options = LinkOptions::wiki().with_delimiter(" ");
/// let links = link_authors_with_options("John Doe; Jane Smith", &options);
/// assert_eq!(links, "[[John Doe]] [[Jane Smith]]");
/// ```
pub fn link_authors_with_options(input: &str, options: &LinkOptions) -> String {
    extract_authors(input, options).to_links(options)
}

/// Normalizes an author list given as UTF-8 bytes.
pub fn link_authors_bytes(data: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(data)?;
    Ok(link_authors(text))
}

/// Reads an author list from a file and normalizes it.
///
/// # Example
///
/// ```no_run
/// use authorlink::link_authors_file;
///
/// let links = link_authors_file("authors.txt")?;
/// println!("{}", links);
/// # Ok::<(), authorlink::Error>(())
/// ```
pub fn link_authors_file(path: impl AsRef<Path>) -> Result<String> {
    let data = std::fs::read(path)?;
    link_authors_bytes(&data)
}

/// Builder for normalizing author lists.
///
/// Provides a fluent API over [`LinkOptions`].
///
/// # Example
///
/// ```
/// use authorlink::{AuthorLinker, LinkStyle};
///
/// let links = AuthorLinker::new()
///     .with_style(LinkStyle::Plain)
///     .with_delimiter("\n")
///     .link("John Doe, Jane Smith");
/// assert_eq!(links, "John Doe\nJane Smith");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuthorLinker {
    options: LinkOptions,
}

impl AuthorLinker {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from existing options.
    pub fn with_options(options: LinkOptions) -> Self {
        Self { options }
    }

    /// Sets the link style.
    pub fn with_style(mut self, style: LinkStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Sets the delimiter placed between links.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.delimiter = delimiter.into();
        self
    }

    /// Enables NFC composition of the input.
    pub fn with_unicode_normalization(mut self) -> Self {
        self.options.normalize_unicode = true;
        self
    }

    /// Keeps the original letter case of each name.
    pub fn keep_case(mut self) -> Self {
        self.options.normalize_case = false;
        self
    }

    /// Sets the minimum name length in UTF-16 code units.
    pub fn with_min_name_chars(mut self, chars: usize) -> Self {
        self.options.min_name_chars = chars;
        self
    }

    /// Returns the configured options.
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Extracts clean names without rendering them.
    pub fn extract(&self, input: &str) -> AuthorList {
        extract_authors(input, &self.options)
    }

    /// Normalizes and renders an author list.
    pub fn link(&self, input: &str) -> String {
        link_authors_with_options(input, &self.options)
    }

    /// Reads an author list from a file, then normalizes and renders it.
    pub fn link_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let text = String::from_utf8(std::fs::read(path)?)?;
        Ok(self.link(&text))
    }
}
