//! C# language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{PatternFlags, PatternRule};
use crate::syntax::tokens::Category;

const KEYWORDS: &str = r"\b(abstract|as|base|bool|break|byte|case|catch|char|checked|class|const|continue|decimal|default|delegate|do|double|else|enum|event|explicit|extern|false|finally|fixed|float|for|foreach|goto|if|implicit|in|int|interface|internal|is|lock|long|namespace|new|null|object|operator|out|override|params|private|protected|public|readonly|ref|return|sbyte|sealed|short|sizeof|stackalloc|static|string|struct|switch|this|throw|true|try|typeof|uint|ulong|unchecked|unsafe|ushort|using|virtual|void|volatile|while|async|await|dynamic|var|nameof|when|where|yield)\b";

// Built-in type names that are also keywords are claimed by the keyword rule
const TYPES: &str = r"\b(bool|byte|char|decimal|double|float|int|long|object|sbyte|short|string|uint|ulong|ushort|void|var)\b";

const STRINGS: &str = r#"@"[^"]*"|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)'"#;

/// Create C# language definition
pub fn csharp_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("csharp");
    lang.add_alias("cs");

    if let Ok(rule) = PatternRule::new(Category::Keywords, KEYWORDS) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Types, TYPES) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Functions, r"\b([a-zA-Z_]\w*)\s*\(") {
        lang.add_pattern(rule.with_group(1));
    }

    if let Ok(rule) = PatternRule::new(Category::Strings, STRINGS) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Comments, r"//.*$|/\*[\s\S]*?\*/", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Numbers, r"\b\d+\.?\d*[fFdDmM]?\b") {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Attributes, r"\[\w+(?:\([^)]*\))?\]") {
        lang.add_pattern(rule);
    }

    lang
}
