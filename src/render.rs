//! Link rendering for author lists.

use crate::error::Result;
use crate::options::LinkOptions;
use std::io::Write;
use std::path::Path;

/// Wraps a single name in the markup of the configured style.
pub fn render_link(name: &str, options: &LinkOptions) -> String {
    let (open, close) = options.style.delimiters();
    let mut link = String::with_capacity(open.len() + name.len() + close.len());
    link.push_str(open);
    link.push_str(name);
    link.push_str(close);
    link
}

/// Renders names as links joined by the configured delimiter.
pub fn render_links<S: AsRef<str>>(names: &[S], options: &LinkOptions) -> String {
    names
        .iter()
        .map(|name| render_link(name.as_ref(), options))
        .collect::<Vec<_>>()
        .join(&options.delimiter)
}

/// Renders names as links and writes them to a file.
pub fn render_to_file<S: AsRef<str>>(
    names: &[S],
    path: impl AsRef<Path>,
    options: &LinkOptions,
) -> Result<()> {
    let content = render_links(names, options);
    std::fs::write(path, content)?;
    Ok(())
}

/// Renders names as links and writes them to a writer.
pub fn render_to_writer<S: AsRef<str>, W: Write>(
    names: &[S],
    writer: &mut W,
    options: &LinkOptions,
) -> Result<()> {
    let content = render_links(names, options);
    writer.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LinkStyle;

    #[test]
    fn test_render_bracket() {
        let names = ["John Doe", "Jane Smith"];
        assert_eq!(
            render_links(&names, &LinkOptions::default()),
            "[John Doe], [Jane Smith]"
        );
    }

    #[test]
    fn test_render_wiki_and_plain() {
        let names = ["John Doe", "Jane Smith"];
        assert_eq!(
            render_links(&names, &LinkOptions::wiki()),
            "[[John Doe]], [[Jane Smith]]"
        );
        assert_eq!(
            render_links(&names, &LinkOptions::plain()),
            "John Doe, Jane Smith"
        );
    }

    #[test]
    fn test_render_custom_delimiter() {
        let options = LinkOptions::default()
            .with_style(LinkStyle::WikiLink)
            .with_delimiter(" ");
        assert_eq!(render_links(&["A Name", "B Name"], &options), "[[A Name]] [[B Name]]");
    }

    #[test]
    fn test_render_empty() {
        let names: [&str; 0] = [];
        assert_eq!(render_links(&names, &LinkOptions::default()), "");
    }

    #[test]
    fn test_render_to_writer() {
        let mut buf = Vec::new();
        render_to_writer(&["John Doe"], &mut buf, &LinkOptions::default()).unwrap();
        assert_eq!(buf, b"[John Doe]");
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");
        render_to_file(&["豊臣 秀吉"], &path, &LinkOptions::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[豊臣 秀吉]");
    }
}
