//! docglow - regex-table syntax highlighting for documentation code samples
//!
//! Code blocks are tokenized against per-language pattern tables and
//! rendered as HTML, each classified span wrapped in
//! `<span class="syntax-{class}">`. There is no parser behind it: rules are
//! applied in a fixed precedence order, and text claimed by one rule is
//! hidden from every later one.
//!
//! ```
//! let html = docglow::highlight("x = \"if\"  # note", "python");
//! assert!(html.contains("<span class=\"syntax-string\">\"if\"</span>"));
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

use std::sync::OnceLock;

pub use config::Config;
pub use error::{GlowError, Result};
pub use syntax::{Catalog, Highlighter, Token, TokenClass};

fn shared() -> &'static Highlighter {
    static HIGHLIGHTER: OnceLock<Highlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(Highlighter::new)
}

/// Highlight `text` as `language` with the built-in catalog
///
/// Unknown languages come back HTML-escaped and unclassified.
pub fn highlight(text: &str, language: &str) -> String {
    shared().highlight(text, language)
}

/// Highlight brace-delimited key/value text (JSON)
pub fn highlight_structured(text: &str) -> String {
    shared().highlight_structured(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert_eq!(highlight("a < b", "nonexistent-lang"), "a &lt; b");
        assert_eq!(
            highlight_structured("[1]"),
            "<span class=\"syntax-punctuation\">[</span>\
             <span class=\"syntax-number\">1</span>\
             <span class=\"syntax-punctuation\">]</span>"
        );
        assert_eq!(highlight("{\"a\": 1}", "json"), highlight_structured("{\"a\": 1}"));
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || highlight(&format!("return {i}"), "python")))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let html = handle.join().unwrap();
            assert_eq!(
                html,
                format!("<span class=\"syntax-keyword\">return</span> <span class=\"syntax-number\">{i}</span>")
            );
        }
    }
}
