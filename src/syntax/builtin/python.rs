//! Python language definition

use super::QUOTED_STRING;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{PatternFlags, PatternRule};
use crate::syntax::tokens::Category;

const KEYWORDS: &str = r"\b(and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield|None|True|False)\b";

const BUILTINS: &str = r"\b(abs|all|any|ascii|bin|bool|breakpoint|bytearray|bytes|callable|chr|classmethod|compile|complex|delattr|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|help|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|memoryview|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b";

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    lang.add_alias("py");

    if let Ok(rule) = PatternRule::new(Category::Keywords, KEYWORDS) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Builtins, BUILTINS) {
        lang.add_pattern(rule);
    }

    // Any other name directly followed by a call
    if let Ok(rule) = PatternRule::new(Category::Functions, r"\b([a-zA-Z_]\w*)\s*\(") {
        lang.add_pattern(rule.with_group(1));
    }

    // Triple quotes first so `"""` is not read as an empty string
    let strings = format!(r#"'''[\s\S]*?'''|"""[\s\S]*?"""|{QUOTED_STRING}"#);
    if let Ok(rule) = PatternRule::new(Category::Strings, &strings) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Comments, r"#.*$", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Numbers, r"\b\d+\.?\d*([eE][+-]?\d+)?\b") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Decorators, r"@\w+") {
        lang.add_pattern(rule);
    }

    lang
}
