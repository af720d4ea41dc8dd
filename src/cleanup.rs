//! # Author Cleanup Pipeline
//!
//! Turns a free-text author list (as copied from a paper's title page) into
//! clean, case-normalized names.
//!
//! ## Pipeline Stages
//!
//! 1. **Stage 1: Boilerplate Removal** - Phrases that contain a separator character
//! 2. **Stage 2: Separator Unification** - `,` `&` `;` newline `∙` and the word "and" become `,`
//! 3. **Stage 3: Splitting** - One candidate per canonical separator
//! 4. **Stage 4: Candidate Cleanup** - Contact info, degrees, annotation marks, case
//! 5. **Stage 5: Filtering** - Candidates shorter than two UTF-16 code units are dropped
//!
//! Rendering the surviving names as links is done by [`crate::render`].

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::model::{AuthorList, ExtractionStats};
use crate::options::LinkOptions;

/// Separator every recognized delimiter is rewritten to.
pub const CANONICAL_SEPARATOR: char = ',';

// ============================================================================
// Stage 1: Boilerplate Removal
// ============================================================================

// Must run before separator unification: the phrase contains '&'.
static RE_PRE_SPLIT_BOILERPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Author Info & Affiliations").unwrap());

/// Stage 1: Remove boilerplate phrases that would be fragmented by splitting.
pub fn strip_boilerplate(input: &str) -> Cow<'_, str> {
    RE_PRE_SPLIT_BOILERPLATE.replace_all(input, "")
}

// ============================================================================
// Stage 2: Separator Unification
// ============================================================================

static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[,&;\n∙]|\band\b").unwrap());

/// Stage 2: Rewrite every recognized separator to [`CANONICAL_SEPARATOR`].
///
/// Recognized: comma, ampersand, semicolon, newline, bullet operator (`∙`)
/// and the standalone word "and" in any case.
pub fn unify_separators(input: &str) -> Cow<'_, str> {
    RE_SEPARATORS.replace_all(input, ",")
}

// ============================================================================
// Stage 3: Splitting
// ============================================================================

/// Stage 3: Split unified text into candidate names, keeping input order.
///
/// Always yields at least one (possibly empty) candidate.
pub fn split_candidates(input: &str) -> Vec<&str> {
    input.split(CANONICAL_SEPARATOR).collect()
}

// ============================================================================
// Stage 4: Candidate Cleanup
// ============================================================================

// Removed exactly once per candidate.
static RE_CONTACT_AND_CREDENTIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)",
        r"https?://\S+",
        r"|\S+@\S+",
        r"|M\.D\.",
        r"|Ph\.D\.",
        r"|ORCID",
        r"|View ORCID Profile",
        r"|Author links open overlay panel",
    ))
    .unwrap()
});

// Removed until the candidate stops changing. Trailing footnote letters are
// ASCII only; `(?i)` would also fold in U+017F and the Kelvin sign.
static RE_ANNOTATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9†*#]|(?:[\s\x{FEFF}][a-zA-Z])+[\s\x{FEFF}]*$").unwrap());

static RE_WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").unwrap());

/// Applies `step` repeatedly until a full application leaves the text unchanged.
///
/// `step` signals "no change" by returning [`Cow::Borrowed`], which is what
/// `Regex::replace_all` does when nothing matched.
pub fn until_stable<F>(input: impl Into<String>, mut step: F) -> String
where
    F: for<'a> FnMut(&'a str) -> Cow<'a, str>,
{
    let mut current = input.into();
    loop {
        let next = match step(&current) {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Removes URLs, email addresses, degrees and ORCID boilerplate (single pass).
pub fn remove_contact_and_credentials(name: &str) -> Cow<'_, str> {
    RE_CONTACT_AND_CREDENTIALS.replace_all(name, "")
}

fn annotation_pass(name: &str) -> Cow<'_, str> {
    RE_ANNOTATIONS.replace_all(name, "")
}

/// Removes annotation marks until none remain.
///
/// Marks are the digits `0`-`9`, `†`, `*`, `#`, and trailing runs of
/// single footnote letters such as `" a b"` or `" A"`. Stripping a digit can
/// expose a new trailing letter, hence the loop.
pub fn remove_annotations(name: &str) -> String {
    until_stable(name, annotation_pass)
}

/// Lower-cases the name, then capitalizes the first character of every word.
///
/// Word detection is Unicode-aware, so "josé garcía" becomes "José García"
/// and caseless scripts pass through untouched.
pub fn normalize_case(name: &str) -> String {
    let lower = name.to_lowercase();
    RE_WORD_START
        .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Stage 4: Clean a single candidate name.
pub fn clean_name(candidate: &str, options: &LinkOptions) -> String {
    let without_contact = remove_contact_and_credentials(candidate);
    let without_marks = remove_annotations(&without_contact);
    let trimmed = without_marks.trim_matches(is_name_padding);

    if options.normalize_case {
        normalize_case(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Whitespace plus the byte order mark, which Windows editors put at the
/// start of saved files.
fn is_name_padding(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

// ============================================================================
// Stage 5: Filtering
// ============================================================================

/// Stage 5: Returns true if a clean name is long enough to keep.
///
/// Length is counted in UTF-16 code units, so a single BMP ideograph is
/// dropped while one outside the BMP (such as `𠮷`) is kept.
pub fn is_valid_name(name: &str, options: &LinkOptions) -> bool {
    name.encode_utf16().count() >= options.min_name_chars
}

// ============================================================================
// Main Pipeline
// ============================================================================

/// Run stages 1-5 and collect the surviving names.
///
/// # Example
///
/// ```
/// use authorlink::cleanup::extract_authors;
/// use authorlink::LinkOptions;
///
/// let list = extract_authors("John Doe1,2†, Jane Smith*", &LinkOptions::default());
/// assert_eq!(list.names(), ["John Doe", "Jane Smith"]);
/// ```
pub fn extract_authors(input: &str, options: &LinkOptions) -> AuthorList {
    let composed: Cow<'_, str> = if options.normalize_unicode {
        Cow::Owned(input.nfc().collect())
    } else {
        Cow::Borrowed(input)
    };

    let stripped = strip_boilerplate(&composed);
    let unified = unify_separators(&stripped);
    trace!(unified = %unified, "separators unified");

    let mut stats = ExtractionStats::default();
    let mut authors = Vec::new();

    for candidate in split_candidates(&unified) {
        stats.candidates += 1;

        let name = clean_name(candidate, options);
        if is_valid_name(&name, options) {
            trace!(candidate, name = %name, "kept candidate");
            authors.push(name);
        } else {
            stats.discarded += 1;
            if !candidate.trim().is_empty() {
                debug!(candidate, "discarded candidate");
            }
        }
    }

    AuthorList { authors, stats }
}
