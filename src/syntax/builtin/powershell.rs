//! PowerShell language definition

use super::{NUMBER, QUOTED_STRING};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{PatternFlags, PatternRule};
use crate::syntax::tokens::Category;

const KEYWORDS: &str = r"\b(if|else|elseif|switch|foreach|for|while|do|until|break|continue|function|param|return|filter|in|throw|trap|try|catch|finally|class|enum|using|namespace|module|inherits)\b";

// Verb-Noun cmdlet names; the noun part may have several dashed segments
const CMDLETS: &str = r"\b(Get|Set|New|Remove|Add|Clear|Close|Copy|Enter|Exit|Find|Format|Hide|Join|Lock|Move|Out|Pop|Push|Redo|Reset|Resize|Search|Select|Show|Skip|Split|Step|Switch|Undo|Unlock|Watch|Connect|Disconnect|Read|Receive|Send|Write|Where|Sort|Tee|Import|Export|ConvertTo|ConvertFrom|Invoke|Start|Stop|Restart|Suspend|Resume|Wait|Use|Update)(-\w+)+";

const OPERATORS: &str = r"-(?:eq|ne|gt|lt|le|ge|like|notlike|match|notmatch|replace|contains|notcontains|in|notin|band|bor|bxor|bnot|and|or|not|split|join)\b|[%+\-*/=]";

/// Create PowerShell language definition
pub fn powershell_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("powershell");
    lang.add_alias("ps1");
    lang.add_alias("psm1");

    if let Ok(rule) = PatternRule::with_flags(Category::Keywords, KEYWORDS, PatternFlags::ignore_case()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Cmdlets, CMDLETS, PatternFlags::ignore_case()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Variables, r"\$\w+") {
        lang.add_pattern(rule);
    }

    // Here-strings span lines
    let strings = format!(r#"@"[\s\S]*?"@|@'[\s\S]*?'@|{QUOTED_STRING}"#);
    if let Ok(rule) = PatternRule::new(Category::Strings, &strings) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Comments, r"<#[\s\S]*?#>|#.*$", PatternFlags::multi_line()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Numbers, NUMBER) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Operators, OPERATORS, PatternFlags::ignore_case()) {
        lang.add_pattern(rule);
    }

    lang
}
