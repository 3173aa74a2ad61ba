//! Markdown language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{PatternFlags, PatternRule};
use crate::syntax::tokens::Category;

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("md");
    lang.add_alias("markdown");

    // Line-anchored rules
    if let Ok(rule) = PatternRule::with_flags(Category::Headers, r"^#{1,6}[ \t]+.+$", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Lists, r"^[ \t]*[-*+][ \t]+.+$", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Blockquotes, r"^>[ \t]+.+$", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }

    // Inline rules
    if let Ok(rule) = PatternRule::new(Category::Bold, r"\*\*[^*]+\*\*|__[^_]+__") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Italic, r"\*[^*]+\*|_[^_]+_") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Code, r"`[^`]+`") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Links, r"\[([^\]]+)\]\(([^)]+)\)") {
        lang.add_pattern(rule);
    }

    lang
}
