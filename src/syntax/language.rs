//! Language definitions for syntax highlighting
//!
//! A `LanguageDefinition` is the rule set registered for one language
//! identifier: at most one pattern rule per category, kept in precedence
//! order, plus the tokenizer strategy the engine should use.

use super::rules::PatternRule;
use super::tokens::Category;

/// Which tokenizer handles a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Ordered pattern categories with placeholder protection
    #[default]
    Generic,
    /// Contextual key/value tokenizer for brace-delimited data
    Structured,
}

/// A complete language definition for syntax highlighting
pub struct LanguageDefinition {
    /// Canonical identifier (e.g. "python", "powershell")
    pub name: String,
    /// Alternate identifiers that resolve to this language
    pub aliases: Vec<String>,
    /// Tokenizer to use
    pub strategy: Strategy,
    /// Pattern rules, sorted by category precedence
    patterns: Vec<PatternRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            aliases: Vec::new(),
            strategy: Strategy::Generic,
            patterns: Vec::new(),
        }
    }

    /// Add an alternate identifier
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_lowercase());
    }

    /// Add a pattern rule, replacing any rule of the same category
    pub fn add_pattern(&mut self, rule: PatternRule) {
        match self.patterns.binary_search_by(|r| r.category.cmp(&rule.category)) {
            Ok(idx) => self.patterns[idx] = rule,
            Err(idx) => self.patterns.insert(idx, rule),
        }
    }

    /// Rule for a category, if this language defines one
    pub fn rule(&self, category: Category) -> Option<&PatternRule> {
        self.patterns
            .binary_search_by(|r| r.category.cmp(&category))
            .ok()
            .map(|idx| &self.patterns[idx])
    }

    /// Rules in precedence order
    pub fn rules(&self) -> impl Iterator<Item = &PatternRule> {
        self.patterns.iter()
    }

    /// Number of rules defined
    pub fn rule_count(&self) -> usize {
        self.patterns.len()
    }

    /// Merge another definition into this one
    ///
    /// Rules from `other` replace rules of the same category and its
    /// aliases are appended. The strategy of `self` is kept.
    pub fn merge(&mut self, other: LanguageDefinition) {
        for alias in other.aliases {
            if !self.aliases.contains(&alias) {
                self.aliases.push(alias);
            }
        }
        for rule in other.patterns {
            self.add_pattern(rule);
        }
    }
}
