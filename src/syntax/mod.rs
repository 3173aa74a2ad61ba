//! Syntax highlighting module
//!
//! This module provides the highlighting engine used for:
//! - Rule catalogs mapping language identifiers to pattern rules
//! - Ordered, overlap-safe rule application (generic languages)
//! - Contextual key/value tokenizing (structured data)

mod builtin;
mod catalog;
mod engine;
mod language;
mod rules;
mod structured;
mod style;
mod tokens;

pub use catalog::Catalog;
pub use engine::{tokenize_generic, Highlighter, Token, DEFAULT_CLASS_PREFIX};
pub use language::{LanguageDefinition, Strategy};
pub use rules::{PatternFlags, PatternRule};
pub use structured::tokenize as tokenize_structured;
pub use style::{Color, Style};
pub use tokens::{Category, TokenClass};
