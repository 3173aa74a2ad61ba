//! SQL language definition

use super::{NUMBER, QUOTED_STRING};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{PatternFlags, PatternRule};
use crate::syntax::tokens::Category;

const KEYWORDS: &str = r"\b(select|from|where|join|inner|left|right|full|outer|on|as|order|by|group|having|union|all|insert|into|values|update|set|delete|create|table|alter|drop|index|view|trigger|procedure|function|declare|begin|end|if|then|else|case|when|while|for|return|commit|rollback|transaction|grant|revoke|with|distinct|top|limit|offset|exists|between|in|like|is|null|not|and|or|asc|desc|primary|key|foreign|references|constraint|default|unique|check)\b";

const FUNCTIONS: &str = r"\b(count|sum|avg|min|max|round|floor|ceiling|abs|coalesce|nullif|cast|convert|substring|left|right|len|length|trim|ltrim|rtrim|upper|lower|replace|charindex|patindex|dateadd|datediff|getdate|year|month|day)\b";

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("sql");

    if let Ok(rule) = PatternRule::with_flags(Category::Keywords, KEYWORDS, PatternFlags::ignore_case()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Functions, FUNCTIONS, PatternFlags::ignore_case()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Strings, QUOTED_STRING) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Comments, r"--.*$|/\*[\s\S]*?\*/", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Numbers, NUMBER) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Operators, r"<>|!=|<=|>=|[=<>+\-*/%]") {
        lang.add_pattern(rule);
    }

    lang
}
