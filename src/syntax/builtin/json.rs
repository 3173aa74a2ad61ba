//! JSON language definition
//!
//! JSON has no pattern rules: keys and values are told apart by the
//! structured tokenizer.

use crate::syntax::language::{LanguageDefinition, Strategy};

/// Create JSON language definition
pub fn json_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("json");
    lang.strategy = Strategy::Structured;
    lang
}
