//! CSS language definition

use super::{NUMBER, QUOTED_STRING};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Category;

const FUNCTIONS: &str = r"\b(rgb|rgba|hsl|hsla|url|calc|var|min|max|clamp|linear-gradient|radial-gradient)\b";

const UNITS: &str = r"\b\d+(?:px|em|rem|%|vh|vw|vmin|vmax|ch|ex|mm|cm|in|pt|pc|deg|rad|turn|s|ms)\b";

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("css");
    lang.add_alias("scss");
    lang.add_alias("sass");

    if let Ok(rule) = PatternRule::new(Category::Comments, r"/\*[\s\S]*?\*/") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Strings, QUOTED_STRING) {
        lang.add_pattern(rule);
    }

    // Selector list and property name are both classified by what follows
    if let Ok(rule) = PatternRule::new(Category::Selectors, r"([.#]?[\w-]+(?:\s*,\s*[.#]?[\w-]+)*)\s*\{") {
        lang.add_pattern(rule.with_group(1));
    }
    if let Ok(rule) = PatternRule::new(Category::Properties, r"([\w-]+)\s*:") {
        lang.add_pattern(rule.with_group(1));
    }
    if let Ok(rule) = PatternRule::new(Category::Values, r":\s*([^;]+);") {
        lang.add_pattern(rule.with_group(1));
    }

    if let Ok(rule) = PatternRule::new(Category::Keywords, r"\b(important|inherit|initial|unset|auto|none)\b") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Functions, FUNCTIONS) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Units, UNITS) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Colors, r"#[0-9a-fA-F]{3,8}\b") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Numbers, NUMBER) {
        lang.add_pattern(rule);
    }

    lang
}
