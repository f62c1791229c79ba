//! HTML extraction implementation
//!
//! This module contains the pure functions that pull titles, command blocks
//! and package links out of parsed BLFS pages. None of them touch the network.

use log::debug;
use scraper::{Html, Selector};
use std::io::{self, Write};

use crate::errors::AppError;

/// Selector for the page title
const TITLE_SELECTOR: &str = "h1";

/// Selector for the shell commands a reader is meant to type
const USER_INPUT_SELECTOR: &str = "pre.userinput";

/// Selector for links to other pages of the book
const PAGE_LINK_SELECTOR: &str = r#"a[href$=".html"]"#;

/// Self-reference present on every chapter index
const INDEX_PAGE: &str = "index.html";

/// Parse a CSS selector, turning parse failures into an [`AppError`]
pub fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::SelectorError {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Extract the title of a package page
///
/// The title is the text of the first `h1` element. Each text fragment is
/// trimmed before the fragments are joined, so markup like
/// `<h1><a id="x"></a>\n  Foo-1.0\n</h1>` yields `Foo-1.0`.
///
/// Returns `Ok(None)` if the page has no `h1`.
pub fn extract_title(document: &Html) -> Result<Option<String>, AppError> {
    let selector = parse_selector(TITLE_SELECTOR)?;

    Ok(document
        .select(&selector)
        .next()
        .map(|heading| heading.text().map(str::trim).collect()))
}

/// Extract every `pre.userinput` block in document order
///
/// Leading and trailing whitespace is removed; everything in between,
/// newlines included, is kept verbatim.
pub fn extract_user_input_blocks(document: &Html) -> Result<Vec<String>, AppError> {
    let selector = parse_selector(USER_INPUT_SELECTOR)?;

    Ok(document
        .select(&selector)
        .map(|pre| pre.text().collect::<String>().trim().to_string())
        .collect())
}

/// Extract package page links from a chapter index
///
/// Returns the `href` of every anchor ending in `.html`, in markup order,
/// except the literal `index.html` self-reference.
pub fn extract_package_links(document: &Html) -> Result<Vec<String>, AppError> {
    let selector = parse_selector(PAGE_LINK_SELECTOR)?;

    let mut links = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href == INDEX_PAGE {
            debug!("Skipping self-reference {}", href);
            continue;
        }
        links.push(href.to_string());
    }

    Ok(links)
}

/// Write one package page in the plain-text output format
///
/// ```text
/// # <title>
///
/// <block 1>
///
/// <block 2>
///
/// ```
pub fn write_package<W: Write>(out: &mut W, title: &str, blocks: &[String]) -> io::Result<()> {
    writeln!(out, "# {}", title)?;
    writeln!(out)?;
    for block in blocks {
        writeln!(out, "{}", block)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_invalid() {
        let err = parse_selector("pre..userinput").unwrap_err();
        assert!(matches!(err, AppError::SelectorError { ref selector, .. } if selector == "pre..userinput"));
    }

    #[test]
    fn test_extract_title_trims_fragments() {
        let html = Html::parse_document(
            "<html><body><h1 class=\"sect1\"><a id=\"foo\" name=\"foo\"></a>\n  Foo-1.0\n</h1></body></html>",
        );
        assert_eq!(extract_title(&html).unwrap().as_deref(), Some("Foo-1.0"));
    }

    #[test]
    fn test_extract_title_joins_nested_text() {
        let html = Html::parse_document("<h1>Foo-<span>1.0</span></h1><h1>Second</h1>");
        assert_eq!(extract_title(&html).unwrap().as_deref(), Some("Foo-1.0"));
    }

    #[test]
    fn test_extract_title_missing() {
        let html = Html::parse_document("<html><body><h2>Not a title</h2></body></html>");
        assert_eq!(extract_title(&html).unwrap(), None);
    }

    #[test]
    fn test_extract_user_input_blocks_in_order() {
        let html = Html::parse_document(
            r#"<body>
                <pre class="userinput"><kbd class="command">make</kbd></pre>
                <pre class="screen">not a command</pre>
                <pre class="root userinput"><kbd class="command">make install</kbd></pre>
            </body>"#,
        );
        let blocks = extract_user_input_blocks(&html).unwrap();
        assert_eq!(blocks, vec!["make", "make install"]);
    }

    #[test]
    fn test_extract_user_input_blocks_keeps_inner_whitespace() {
        let html = Html::parse_document(
            "<pre class=\"userinput\">\n  ./configure --prefix=/usr &amp;&amp;\n  make  \n\n</pre>",
        );
        let blocks = extract_user_input_blocks(&html).unwrap();
        assert_eq!(blocks, vec!["./configure --prefix=/usr &&\n  make"]);
    }

    #[test]
    fn test_extract_user_input_blocks_none() {
        let html = Html::parse_document("<h1>Foo</h1><p>Nothing to run.</p>");
        assert!(extract_user_input_blocks(&html).unwrap().is_empty());
    }

    #[test]
    fn test_extract_package_links_skips_index() {
        let html = Html::parse_document(
            r#"<ul>
                <li><a href="a.html">A</a></li>
                <li><a href="style.css">css</a></li>
                <li><a href="b.html">B</a></li>
                <li><a href="index.html">Index</a></li>
                <li><a href="c.html#section">anchor</a></li>
                <li><a>no href</a></li>
            </ul>"#,
        );
        let links = extract_package_links(&html).unwrap();
        assert_eq!(links, vec!["a.html", "b.html"]);
    }

    #[test]
    fn test_extract_package_links_only_skips_exact_index() {
        let html = Html::parse_document(r#"<a href="../index.html">up</a><a href="x.html">x</a>"#);
        let links = extract_package_links(&html).unwrap();
        assert_eq!(links, vec!["../index.html", "x.html"]);
    }

    #[test]
    fn test_write_package_format() {
        let mut out = Vec::new();
        write_package(
            &mut out,
            "Foo-1.0",
            &["make".to_string(), "make install".to_string()],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# Foo-1.0\n\nmake\n\nmake install\n\n"
        );
    }

    #[test]
    fn test_write_package_without_blocks() {
        let mut out = Vec::new();
        write_package(&mut out, "Foo-1.0", &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# Foo-1.0\n\n");
    }
}
