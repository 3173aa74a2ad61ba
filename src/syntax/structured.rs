//! Key/value tokenizer for brace-delimited data (JSON)
//!
//! Whether a quoted literal is a key or a value depends on what follows
//! it, which a context-free pattern category cannot express. Quoted
//! literals are pulled out first and classified by a local lookahead;
//! numbers, literal constants and punctuation are then classified in one
//! scan over the string-free text.
//!
//! Classification is local only. Malformed input is not rejected: an
//! unterminated quote simply does not match and stays plain text.

use std::sync::OnceLock;

use regex::Regex;

use super::engine::{Stash, Token};
use super::tokens::TokenClass;

fn quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).expect("valid quoted-literal pattern"))
}

fn scalars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?P<number>-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b)|(?P<constant>\b(?:true|false|null)\b)|(?P<punct>[{}\[\],:])",
        )
        .expect("valid scalar pattern")
    })
}

/// Whether the text after a literal introduces its value
fn is_key(rest: &str) -> bool {
    rest.trim_start().starts_with(':')
}

/// Split key/value text into classified tokens
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut stash = Stash::new();
    let Some(working) = stash.protect(text) else {
        return vec![Token::plain(text)];
    };

    let literals: Vec<_> = quoted()
        .find_iter(&working)
        .map(|m| {
            let class = if is_key(&working[m.end()..]) {
                TokenClass::Property
            } else {
                TokenClass::String
            };
            (m.start(), m.end(), class)
        })
        .collect();
    let working = stash.replace_spans(&working, literals);

    let classified: Vec<_> = scalars()
        .captures_iter(&working)
        .filter_map(|caps| {
            let (m, class) = if let Some(m) = caps.name("number") {
                (m, TokenClass::Number)
            } else if let Some(m) = caps.name("constant") {
                (m, TokenClass::Keyword)
            } else {
                (caps.name("punct")?, TokenClass::Punctuation)
            };
            Some((m.start(), m.end(), class))
        })
        .collect();
    let working = stash.replace_spans(&working, classified);

    stash.resolve(&working)
}
