//! AL (Business Central) language definition

use super::{NUMBER, QUOTED_STRING};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{PatternFlags, PatternRule};
use crate::syntax::tokens::Category;

const KEYWORDS: &str = r"\b(procedure|trigger|var|begin|end|if|then|else|case|of|repeat|until|while|do|for|to|downto|exit|break|with|record|page|table|codeunit|query|report|xmlport|enum|interface|implements|extends|field|value|local|protected|internal|array|list|dictionary|action|area|group|part|keys|key|fieldgroups|fieldgroup|layout|actions|modify|pageextension|tableextension|enumextension|true|false)\b";

const TYPES: &str = r"\b(Integer|Decimal|Boolean|Text|Code|Date|Time|DateTime|Duration|BigInteger|Guid|RecordId|RecordRef|FieldRef|Variant|Option|Blob|DateFormula|BigText|Media|MediaSet|Enum)\b";

const FUNCTIONS: &str = r"\b(Message|Error|Confirm|StrSubstNo|CalcFields|CalcSums|SetRange|SetFilter|FindFirst|FindLast|FindSet|Next|Get|Insert|Modify|Delete|DeleteAll|Reset|Init|Validate|TestField|FieldError|Count|IsEmpty|Copy|TransferFields|SetAutoCalcFields|SetView|GetView|CurrentKey|SetCurrentKey|Ascending|SetAscending|LockTable|Consistent|ReadConsistency|ReadCommitted|ReadUncommitted|UpdatePropagation|Rec|xRec|CurrPage|CurrReport|CurrFieldNo|GuiAllowed|UserId|CompanyName|Today|WorkDate|CurrentDateTime)\b";

const OPERATORS: &str = r":=|<>|<=|>=|[<>+\-*/=]|\b(?:and|or|not|xor|div|mod)\b";

/// Create AL language definition
pub fn al_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("al");

    // Keywords are case-insensitive in AL, names of types and methods are not
    if let Ok(rule) = PatternRule::with_flags(Category::Keywords, KEYWORDS, PatternFlags::ignore_case()) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Types, TYPES) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::new(Category::Functions, FUNCTIONS) {
        lang.add_pattern(rule);
    }

    if let Ok(rule) = PatternRule::new(Category::Strings, QUOTED_STRING) {
        lang.add_pattern(rule);
    }
    if let Ok(rule) = PatternRule::with_flags(Category::Comments, r"//.*$", PatternFlags::multi_line()) {
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
