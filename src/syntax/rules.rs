//! Pattern rules for syntax highlighting
//!
//! A rule pairs a category with a compiled regex. Rules are always
//! scanned globally: every non-overlapping match in the text counts,
//! leftmost first.

use regex::{Regex, RegexBuilder};

use super::tokens::{Category, TokenClass};

/// Matching flags for a pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    /// Match letters regardless of case
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries
    pub multi_line: bool,
}

impl PatternFlags {
    /// Case-insensitive matching
    pub fn ignore_case() -> Self {
        Self {
            case_insensitive: true,
            ..Default::default()
        }
    }

    /// Line-anchored matching
    pub fn multi_line() -> Self {
        Self {
            multi_line: true,
            ..Default::default()
        }
    }
}

/// A single pattern rule
pub struct PatternRule {
    /// Category; doubles as the rule name
    pub category: Category,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Class assigned to matched text
    pub class: TokenClass,
    /// Capture group holding the classified text (0 = whole match)
    ///
    /// Text matched outside the group is trailing or leading context:
    /// it is consumed by the scan but stays unclassified.
    pub group: usize,
}

impl PatternRule {
    /// Create a rule with default flags
    pub fn new(category: Category, pattern: &str) -> Result<Self, regex::Error> {
        Self::with_flags(category, pattern, PatternFlags::default())
    }

    /// Create a rule with explicit flags
    pub fn with_flags(
        category: Category,
        pattern: &str,
        flags: PatternFlags,
    ) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .crlf(true)
            .build()?;
        Ok(Self {
            category,
            pattern: regex,
            class: category.default_class(),
            group: 0,
        })
    }

    /// Builder: classify as `class` instead of the category default
    pub fn with_class(mut self, class: TokenClass) -> Self {
        self.class = class;
        self
    }

    /// Builder: only classify the given capture group
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// Byte ranges to classify, in order, non-empty and non-overlapping
    pub fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        if self.group == 0 {
            return self
                .pattern
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .map(|m| (m.start(), m.end()))
                .collect();
        }

        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.group))
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_scan() {
        let rule = PatternRule::new(Category::Numbers, r"\d+").unwrap();
        assert_eq!(rule.spans("a 1 bb 22 ccc 333"), vec![(2, 3), (7, 9), (14, 17)]);
        assert!(rule.spans("no numbers").is_empty());
        assert_eq!(rule.class, TokenClass::Number);
    }

    #[test]
    fn test_case_insensitive() {
        let rule = PatternRule::with_flags(Category::Keywords, r"\bbegin\b", PatternFlags::ignore_case())
            .unwrap();
        assert_eq!(rule.spans("BEGIN begin Begin").len(), 3);

        let strict = PatternRule::new(Category::Keywords, r"\bbegin\b").unwrap();
        assert_eq!(strict.spans("BEGIN begin Begin").len(), 1);
    }

    #[test]
    fn test_multi_line_anchors() {
        let rule = PatternRule::with_flags(Category::Comments, r"#.*$", PatternFlags::multi_line())
            .unwrap();
        assert_eq!(rule.spans("a # one\r\nb # two"), vec![(2, 7), (11, 16)]);
    }

    #[test]
    fn test_capture_group_leaves_context_unclassified() {
        let rule = PatternRule::new(Category::Functions, r"\b([a-zA-Z_]\w*)\s*\(")
            .unwrap()
            .with_group(1);
        assert_eq!(rule.spans("print (len(x))"), vec![(0, 5), (7, 10)]);
    }

    #[test]
    fn test_empty_matches_skipped() {
        let rule = PatternRule::new(Category::Operators, r"-*").unwrap();
        assert_eq!(rule.spans("a--b"), vec![(1, 3)]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new(Category::Strings, r"(unclosed").is_err());
    }

    #[test]
    fn test_class_override() {
        let rule = PatternRule::new(Category::Keywords, r"\btrue\b")
            .unwrap()
            .with_class(TokenClass::Number);
        assert_eq!(rule.class, TokenClass::Number);
        assert_eq!(rule.category, Category::Keywords);
    }
}
