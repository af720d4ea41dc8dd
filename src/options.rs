//! Options for author list normalization and link rendering.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Options for controlling normalization and output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// How each clean name is wrapped in the output.
    pub style: LinkStyle,

    /// Text placed between rendered links.
    /// Default: ", "
    pub delimiter: String,

    /// Lower-case each name and capitalize the first letter of every word.
    pub normalize_case: bool,

    /// NFC-compose the input before any other stage.
    pub normalize_unicode: bool,

    /// Minimum number of UTF-16 code units a clean name needs to be kept.
    /// Default: 2 (single characters are footnote remnants).
    pub min_name_chars: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            style: LinkStyle::Bracket,
            delimiter: ", ".to_string(),
            normalize_case: true,
            normalize_unicode: false,
            min_name_chars: 2,
        }
    }
}

impl LinkOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scrapbox-style `[Name]` links (same as the default).
    pub fn scrapbox() -> Self {
        Self::default()
    }

    /// Wiki-style `[[Name]]` links, as used by Obsidian and Roam.
    pub fn wiki() -> Self {
        Self {
            style: LinkStyle::WikiLink,
            ..Self::default()
        }
    }

    /// Bare names without any link markup.
    pub fn plain() -> Self {
        Self {
            style: LinkStyle::Plain,
            ..Self::default()
        }
    }

    /// Sets the link style.
    pub fn with_style(mut self, style: LinkStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the delimiter placed between links.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enables NFC composition of the input.
    pub fn with_unicode_normalization(mut self) -> Self {
        self.normalize_unicode = true;
        self
    }

    /// Keeps the original letter case of each name.
    pub fn keep_case(mut self) -> Self {
        self.normalize_case = false;
        self
    }

    /// Sets the minimum name length in UTF-16 code units.
    pub fn with_min_name_chars(mut self, chars: usize) -> Self {
        self.min_name_chars = chars;
        self
    }
}

/// Wrapping applied to each name in the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// `[Name]`
    #[default]
    Bracket,
    /// `[[Name]]`
    WikiLink,
    /// `Name`
    Plain,
}

impl LinkStyle {
    /// Returns the opening and closing markup for this style.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            LinkStyle::Bracket => ("[", "]"),
            LinkStyle::WikiLink => ("[[", "]]"),
            LinkStyle::Plain => ("", ""),
        }
    }
}

impl fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkStyle::Bracket => "bracket",
            LinkStyle::WikiLink => "wiki",
            LinkStyle::Plain => "plain",
        };
        f.write_str(name)
    }
}

impl FromStr for LinkStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bracket" | "scrapbox" => Ok(LinkStyle::Bracket),
            "wiki" | "wikilink" => Ok(LinkStyle::WikiLink),
            "plain" | "none" => Ok(LinkStyle::Plain),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_scrapbox() {
        let options = LinkOptions::default();
        assert_eq!(options, LinkOptions::scrapbox());
        assert_eq!(options.style, LinkStyle::Bracket);
        assert_eq!(options.delimiter, ", ");
        assert!(options.normalize_case);
        assert!(!options.normalize_unicode);
        assert_eq!(options.min_name_chars, 2);
    }

    #[test]
    fn test_builder_chain() {
        let options = LinkOptions::new()
            .with_style(LinkStyle::Plain)
            .with_delimiter("; ")
            .with_unicode_normalization()
            .keep_case()
            .with_min_name_chars(3);

        assert_eq!(options.style, LinkStyle::Plain);
        assert_eq!(options.delimiter, "; ");
        assert!(options.normalize_unicode);
        assert!(!options.normalize_case);
        assert_eq!(options.min_name_chars, 3);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("bracket".parse::<LinkStyle>().unwrap(), LinkStyle::Bracket);
        assert_eq!("WIKI".parse::<LinkStyle>().unwrap(), LinkStyle::WikiLink);
        assert_eq!(" plain ".parse::<LinkStyle>().unwrap(), LinkStyle::Plain);
        assert!(matches!(
            "html".parse::<LinkStyle>(),
            Err(Error::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_style_display_roundtrips() {
        for style in [LinkStyle::Bracket, LinkStyle::WikiLink, LinkStyle::Plain] {
            assert_eq!(style.to_string().parse::<LinkStyle>().unwrap(), style);
        }
    }
}
