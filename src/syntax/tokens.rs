//! Token classes and rule categories
//!
//! This module defines the closed set of classification names that
//! end up in the rendered markup, and the rule categories whose
//! declaration order is the precedence order used by the engine.

use super::style::{Color, Style};

/// Semantic classes a span of text can be tagged with
///
/// The names returned by [`TokenClass::name`] are part of the output
/// contract: stylesheets select on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Line and block comments
    Comment,
    /// Language keywords and literal constants
    Keyword,
    /// Type names
    Type,
    /// Function names and calls
    Function,
    /// Built-in functions
    Builtin,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// Operators (+, -, :=, -eq, ...)
    Operator,
    /// Variables ($name)
    Variable,
    /// Property names and object keys
    Property,
    /// Markup tags
    Tag,
    /// Markup and code attributes
    Attribute,
    /// Decorators (@name)
    Decorator,
    /// Braces, brackets, commas, separators
    Punctuation,
}

impl TokenClass {
    /// Every class, in declaration order
    pub const ALL: [TokenClass; 14] = [
        TokenClass::Comment,
        TokenClass::Keyword,
        TokenClass::Type,
        TokenClass::Function,
        TokenClass::Builtin,
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Variable,
        TokenClass::Property,
        TokenClass::Tag,
        TokenClass::Attribute,
        TokenClass::Decorator,
        TokenClass::Punctuation,
    ];

    /// Class name as used in markup (without prefix)
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::Keyword => "keyword",
            TokenClass::Type => "type",
            TokenClass::Function => "function",
            TokenClass::Builtin => "builtin",
            TokenClass::String => "string",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Variable => "variable",
            TokenClass::Property => "property",
            TokenClass::Tag => "tag",
            TokenClass::Attribute => "attribute",
            TokenClass::Decorator => "decorator",
            TokenClass::Punctuation => "punctuation",
        }
    }

    /// Parse a class from its markup name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Terminal style used by the ANSI preview
    pub fn default_style(&self) -> Style {
        match self {
            TokenClass::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenClass::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenClass::Type => Style::fg(Color::Yellow),
            TokenClass::Function => Style::fg(Color::Blue),
            TokenClass::Builtin => Style::fg(Color::BrightCyan),
            TokenClass::String => Style::fg(Color::Green),
            TokenClass::Number => Style::fg(Color::Cyan),
            TokenClass::Operator => Style::fg(Color::BrightWhite),
            TokenClass::Variable => Style::fg(Color::BrightRed),
            TokenClass::Property => Style::fg(Color::BrightBlue),
            TokenClass::Tag => Style::fg(Color::Red),
            TokenClass::Attribute => Style::fg(Color::BrightYellow),
            TokenClass::Decorator => Style::fg(Color::BrightMagenta),
            TokenClass::Punctuation => Style::default(),
        }
    }
}

/// Rule categories
///
/// The variant order is the precedence order: when two categories could
/// claim the same text, the one declared first wins. A language only has
/// to define the categories it needs; absent ones are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Comments,
    Properties,
    Strings,
    Keywords,
    Types,
    Builtins,
    Functions,
    Cmdlets,
    Numbers,
    Operators,
    Variables,
    Attributes,
    Decorators,
    Tags,
    Cdata,
    Headers,
    Bold,
    Italic,
    Links,
    Lists,
    Blockquotes,
    Code,
    Punctuation,
    Selectors,
    Values,
    Units,
    Colors,
}

impl Category {
    /// All categories in precedence order
    pub const PRECEDENCE: [Category; 27] = [
        Category::Comments,
        Category::Properties,
        Category::Strings,
        Category::Keywords,
        Category::Types,
        Category::Builtins,
        Category::Functions,
        Category::Cmdlets,
        Category::Numbers,
        Category::Operators,
        Category::Variables,
        Category::Attributes,
        Category::Decorators,
        Category::Tags,
        Category::Cdata,
        Category::Headers,
        Category::Bold,
        Category::Italic,
        Category::Links,
        Category::Lists,
        Category::Blockquotes,
        Category::Code,
        Category::Punctuation,
        Category::Selectors,
        Category::Values,
        Category::Units,
        Category::Colors,
    ];

    /// Rule name, also the key used in config files
    pub fn name(&self) -> &'static str {
        match self {
            Category::Comments => "comments",
            Category::Properties => "properties",
            Category::Strings => "strings",
            Category::Keywords => "keywords",
            Category::Types => "types",
            Category::Builtins => "builtins",
            Category::Functions => "functions",
            Category::Cmdlets => "cmdlets",
            Category::Numbers => "numbers",
            Category::Operators => "operators",
            Category::Variables => "variables",
            Category::Attributes => "attributes",
            Category::Decorators => "decorators",
            Category::Tags => "tags",
            Category::Cdata => "cdata",
            Category::Headers => "headers",
            Category::Bold => "bold",
            Category::Italic => "italic",
            Category::Links => "links",
            Category::Lists => "lists",
            Category::Blockquotes => "blockquotes",
            Category::Code => "code",
            Category::Punctuation => "punctuation",
            Category::Selectors => "selectors",
            Category::Values => "values",
            Category::Units => "units",
            Category::Colors => "colors",
        }
    }

    /// Parse a category from its rule name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PRECEDENCE.into_iter().find(|category| category.name() == name)
    }

    /// Class assigned to matches unless the rule overrides it
    pub fn default_class(&self) -> TokenClass {
        match self {
            Category::Keywords | Category::Headers | Category::Bold => TokenClass::Keyword,
            Category::Types | Category::Selectors => TokenClass::Type,
            Category::Functions | Category::Cmdlets | Category::Links => TokenClass::Function,
            Category::Builtins => TokenClass::Builtin,
            Category::Strings
            | Category::Code
            | Category::Cdata
            | Category::Values
            | Category::Colors => TokenClass::String,
            Category::Comments | Category::Blockquotes => TokenClass::Comment,
            Category::Numbers | Category::Units => TokenClass::Number,
            Category::Operators | Category::Lists => TokenClass::Operator,
            Category::Variables | Category::Italic => TokenClass::Variable,
            Category::Properties => TokenClass::Property,
            Category::Tags => TokenClass::Tag,
            Category::Attributes => TokenClass::Attribute,
            Category::Decorators => TokenClass::Decorator,
            Category::Punctuation => TokenClass::Punctuation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_matches_declaration_order() {
        let mut sorted = Category::PRECEDENCE;
        sorted.sort();
        assert_eq!(sorted, Category::PRECEDENCE);
        assert!(Category::Comments < Category::Strings);
        assert!(Category::Strings < Category::Keywords);
        assert!(Category::Numbers < Category::Operators);
    }

    #[test]
    fn test_category_names_unique() {
        for (i, a) in Category::PRECEDENCE.iter().enumerate() {
            for b in &Category::PRECEDENCE[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
            assert_eq!(Category::from_name(a.name()), Some(*a));
        }
    }

    #[test]
    fn test_class_from_name() {
        for class in TokenClass::ALL {
            assert_eq!(TokenClass::from_name(class.name()), Some(class));
        }
        assert_eq!(TokenClass::from_name("Keyword"), None);
        assert_eq!(TokenClass::from_name(""), None);
    }

    #[test]
    fn test_default_classes() {
        assert_eq!(Category::Cmdlets.default_class(), TokenClass::Function);
        assert_eq!(Category::Cdata.default_class(), TokenClass::String);
        assert_eq!(Category::Blockquotes.default_class(), TokenClass::Comment);
        assert_eq!(Category::Units.default_class(), TokenClass::Number);
    }

    #[test]
    fn test_default_styles() {
        assert!(!TokenClass::Comment.default_style().is_default());
        assert!(!TokenClass::Keyword.default_style().is_default());
        assert!(TokenClass::Punctuation.default_style().is_default());
    }
}
