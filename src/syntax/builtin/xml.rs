//! XML language definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Category;

/// Create XML language definition
pub fn xml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("xml");
    lang.add_alias("xsd");
    lang.add_alias("xaml");

    if let Ok(rule) = PatternRule::new(Category::Comments, r"<!--[\s\S]*?-->") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Strings, QUOTED_STRING) {
        lang.add_pattern(rule);
    }
    // Attribute names; quoted values are already strings at this point
    if let Ok(rule) = PatternRule::new(Category::Attributes, r"\s([\w:.-]+)\s*=") {
        lang.add_pattern(rule.with_group(1));
    }
    if let Ok(rule) = PatternRule::new(Category::Tags, r"</?[\w:.-]+|/>") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Cdata, r"<!\[CDATA\[[\s\S]*?\]\]>") {
        lang.add_pattern(rule);
    }

    lang
}
