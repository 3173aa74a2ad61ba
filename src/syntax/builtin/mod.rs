//! Built-in language definitions
//!
//! Rule tables for the languages that show up in documentation pages.
//! Patterns use the `regex` crate syntax, which has no look-around or
//! backreferences: trailing context is expressed with a capture group
//! (see `PatternRule::with_group`).

mod al;
mod csharp;
mod css;
mod json;
mod markdown;
mod powershell;
mod python;
mod sql;
mod xml;

use super::language::LanguageDefinition;

/// Single- or double-quoted string on one line, backslash escapes allowed
pub(super) const QUOTED_STRING: &str = r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#;

/// Integer or decimal number
pub(super) const NUMBER: &str = r"\b\d+\.?\d*\b";

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        al::al_language(),
        powershell::powershell_language(),
        json::json_language(),
        python::python_language(),
        csharp::csharp_language(),
        xml::xml_language(),
        sql::sql_language(),
        markdown::markdown_language(),
        css::css_language(),
    ]
}
