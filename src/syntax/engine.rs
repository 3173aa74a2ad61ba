//! Highlighting engine
//!
//! Rules are applied one category at a time, in precedence order, over a
//! working copy of the text. Whatever a rule matches is moved into a
//! per-call [`Stash`] and replaced in the working text by a single
//! placeholder character, so later (lower precedence) rules can neither
//! re-match it nor match across its contents. When every rule has run the
//! placeholders are resolved back into classified tokens.
//!
//! Placeholders are characters from the supplementary private use planes.
//! Those characters are not word characters, digits or whitespace, so
//! `\b`, `\w`, `\d` and `\s` treat a placeholder like punctuation. Literal
//! occurrences in the input are stashed as plain text before any rule
//! runs, which keeps the placeholder shape out of reach of user text.

use super::catalog::Catalog;
use super::language::{LanguageDefinition, Strategy};
use super::rules::PatternRule;
use super::structured;
use super::tokens::TokenClass;
use crate::render::html;

const PLANE_A_START: u32 = 0xF0000;
const PLANE_B_START: u32 = 0x10_0000;
/// Usable code points per plane (the last two of each are noncharacters)
const PLANE_SLOTS: usize = 0xFFFE;

/// Default prefix for class names in the rendered markup
pub const DEFAULT_CLASS_PREFIX: &str = "syntax-";

/// A run of source text and its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// `None` for plain, unclassified text
    pub class: Option<TokenClass>,
    /// Raw (unescaped) source text
    pub text: String,
}

impl Token {
    /// Create a plain text token
    pub fn plain(text: &str) -> Self {
        Self {
            class: None,
            text: text.to_string(),
        }
    }

    /// Create a classified token
    pub fn classified(class: TokenClass, text: &str) -> Self {
        Self {
            class: Some(class),
            text: text.to_string(),
        }
    }
}

/// Whether a character lies in the placeholder range
pub(crate) fn is_placeholder(ch: char) -> bool {
    matches!(ch as u32, 0xF0000..=0xFFFFF | 0x10_0000..=0x10_FFFF)
}

fn slot_char(idx: usize) -> Option<char> {
    if idx < PLANE_SLOTS {
        char::from_u32(PLANE_A_START + idx as u32)
    } else if idx < 2 * PLANE_SLOTS {
        char::from_u32(PLANE_B_START + (idx - PLANE_SLOTS) as u32)
    } else {
        None
    }
}

fn slot_index(ch: char) -> Option<usize> {
    let cp = ch as u32;
    if (PLANE_A_START..PLANE_A_START + PLANE_SLOTS as u32).contains(&cp) {
        Some((cp - PLANE_A_START) as usize)
    } else if (PLANE_B_START..PLANE_B_START + PLANE_SLOTS as u32).contains(&cp) {
        Some((cp - PLANE_B_START) as usize + PLANE_SLOTS)
    } else {
        None
    }
}

/// Placeholder storage for a single highlighting call
pub(crate) struct Stash {
    tokens: Vec<Token>,
}

impl Stash {
    pub(crate) fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Store a token, returning its placeholder (None once the space is used up)
    fn push(&mut self, token: Token) -> Option<char> {
        let ch = slot_char(self.tokens.len())?;
        self.tokens.push(token);
        Some(ch)
    }

    /// Copy of `text` with every literal placeholder-range character
    /// stashed as plain text
    ///
    /// Returns None if the input holds more such characters than there are
    /// placeholders.
    pub(crate) fn protect(&mut self, text: &str) -> Option<String> {
        if !text.chars().any(is_placeholder) {
            return Some(text.to_string());
        }

        let mut out = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            if is_placeholder(ch) {
                let literal = ch.encode_utf8(&mut buf);
                out.push(self.push(Token::plain(literal))?);
            } else {
                out.push(ch);
            }
        }
        Some(out)
    }

    /// Classify `matched` and append the result to `out`
    ///
    /// Placeholders already inside the match are kept as they are; only the
    /// raw runs between them are classified, and whitespace-only runs
    /// between placeholders stay plain.
    pub(crate) fn classify(&mut self, matched: &str, class: TokenClass, out: &mut String) {
        if !matched.chars().any(is_placeholder) {
            self.classify_run(matched, class, out);
            return;
        }

        let mut run_start = 0;
        for (idx, ch) in matched.char_indices() {
            if is_placeholder(ch) {
                self.classify_split_run(&matched[run_start..idx], class, out);
                out.push(ch);
                run_start = idx + ch.len_utf8();
            }
        }
        self.classify_split_run(&matched[run_start..], class, out);
    }

    fn classify_split_run(&mut self, run: &str, class: TokenClass, out: &mut String) {
        if run.trim().is_empty() {
            out.push_str(run);
        } else {
            self.classify_run(run, class, out);
        }
    }

    fn classify_run(&mut self, run: &str, class: TokenClass, out: &mut String) {
        if run.is_empty() {
            return;
        }
        match self.push(Token::classified(class, run)) {
            Some(ch) => out.push(ch),
            None => out.push_str(run),
        }
    }

    /// Replace the given spans of `working` with placeholders
    pub(crate) fn replace_spans<I>(&mut self, working: &str, spans: I) -> String
    where
        I: IntoIterator<Item = (usize, usize, TokenClass)>,
    {
        let mut out = String::with_capacity(working.len());
        let mut last = 0;
        for (start, end, class) in spans {
            out.push_str(&working[last..start]);
            self.classify(&working[start..end], class, &mut out);
            last = end;
        }
        out.push_str(&working[last..]);
        out
    }

    /// Resolve all placeholders, producing the final token list
    ///
    /// Adjacent plain runs are merged.
    pub(crate) fn resolve(mut self, working: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut plain = String::new();

        for ch in working.chars() {
            let stashed = slot_index(ch).and_then(|idx| self.tokens.get_mut(idx));
            match stashed {
                Some(token) if token.class.is_none() => plain.push_str(&token.text),
                Some(token) => {
                    if !plain.is_empty() {
                        tokens.push(Token::plain(&plain));
                        plain.clear();
                    }
                    tokens.push(Token {
                        class: token.class,
                        text: std::mem::take(&mut token.text),
                    });
                }
                None => plain.push(ch),
            }
        }

        if !plain.is_empty() {
            tokens.push(Token::plain(&plain));
        }
        tokens
    }
}

fn apply_rule(rule: &PatternRule, working: String, stash: &mut Stash) -> String {
    let spans = rule.spans(&working);
    if spans.is_empty() {
        return working;
    }
    let class = rule.class;
    stash.replace_spans(&working, spans.into_iter().map(|(start, end)| (start, end, class)))
}

/// Tokenize with the ordered pattern categories of `lang`
pub fn tokenize_generic(lang: &LanguageDefinition, text: &str) -> Vec<Token> {
    let mut stash = Stash::new();
    let Some(mut working) = stash.protect(text) else {
        return vec![Token::plain(text)];
    };

    for rule in lang.rules() {
        working = apply_rule(rule, working, &mut stash);
    }

    stash.resolve(&working)
}

/// Highlighter over a rule catalog
///
/// Holds no per-call state, so one instance can serve any number of
/// code blocks, from any number of threads.
pub struct Highlighter {
    catalog: Catalog,
    class_prefix: String,
}

impl Highlighter {
    /// Create a highlighter with the built-in languages
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// Create a highlighter over a custom catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }

    /// Builder: prefix used for class names
    pub fn with_class_prefix(mut self, prefix: &str) -> Self {
        self.class_prefix = prefix.to_string();
        self
    }

    /// The rule catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Class name prefix
    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Split `text` into classified tokens
    ///
    /// Unknown languages yield a single plain token.
    pub fn tokenize(&self, text: &str, language: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        match self.catalog.get(language) {
            Some(lang) => match lang.strategy {
                Strategy::Generic => tokenize_generic(lang, text),
                Strategy::Structured => structured::tokenize(text),
            },
            None => vec![Token::plain(text)],
        }
    }

    /// Highlight `text` as `language`, producing an HTML fragment
    pub fn highlight(&self, text: &str, language: &str) -> String {
        html::to_html(&self.tokenize(text, language), &self.class_prefix)
    }

    /// Highlight brace-delimited key/value text
    pub fn highlight_structured(&self, text: &str) -> String {
        html::to_html(&structured::tokenize(text), &self.class_prefix)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::html::{escape_html, strip_tags, unescape_html};
    use crate::syntax::rules::PatternFlags;
    use crate::syntax::tokens::Category;

    fn test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("test");
        lang.add_pattern(PatternRule::new(Category::Strings, r#""[^"\n]*""#).unwrap());
        lang.add_pattern(PatternRule::new(Category::Keywords, r"\b(if|else|return)\b").unwrap());
        lang.add_pattern(PatternRule::new(Category::Numbers, r"\b\d+\b").unwrap());
        lang.add_pattern(
            PatternRule::with_flags(Category::Comments, r"//.*$", PatternFlags::multi_line()).unwrap(),
        );
        lang.add_pattern(PatternRule::new(Category::Operators, r"[=<>&+-]+").unwrap());
        lang
    }

    fn classes(tokens: &[Token]) -> Vec<(Option<TokenClass>, &str)> {
        tokens.iter().map(|t| (t.class, t.text.as_str())).collect()
    }

    fn concat(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_basic_classification() {
        let tokens = tokenize_generic(&test_language(), "if x = 42");
        assert_eq!(
            classes(&tokens),
            vec![
                (Some(TokenClass::Keyword), "if"),
                (None, " x "),
                (Some(TokenClass::Operator), "="),
                (None, " "),
                (Some(TokenClass::Number), "42"),
            ]
        );
    }

    #[test]
    fn test_string_beats_keyword() {
        let tokens = tokenize_generic(&test_language(), r#"return "if 1""#);
        assert_eq!(
            classes(&tokens),
            vec![
                (Some(TokenClass::Keyword), "return"),
                (None, " "),
                (Some(TokenClass::String), "\"if 1\""),
            ]
        );
    }

    #[test]
    fn test_comment_beats_string() {
        let tokens = tokenize_generic(&test_language(), "x // \"if\" 3\ny");
        assert_eq!(
            classes(&tokens),
            vec![
                (None, "x "),
                (Some(TokenClass::Comment), "// \"if\" 3"),
                (None, "\ny"),
            ]
        );
    }

    #[test]
    fn test_match_spanning_placeholder_is_split() {
        let mut lang = LanguageDefinition::new("test");
        lang.add_pattern(PatternRule::new(Category::Strings, r#""[^"]*""#).unwrap());
        lang.add_pattern(PatternRule::new(Category::Values, r":[^;]+;").unwrap().with_class(TokenClass::Type));

        let tokens = tokenize_generic(&lang, r#"a: "b" c;"#);
        assert_eq!(
            classes(&tokens),
            vec![
                (None, "a"),
                (Some(TokenClass::Type), ": "),
                (Some(TokenClass::String), "\"b\""),
                (Some(TokenClass::Type), " c;"),
            ]
        );
    }

    #[test]
    fn test_absent_categories_are_skipped() {
        let mut lang = LanguageDefinition::new("numbers-only");
        lang.add_pattern(PatternRule::new(Category::Numbers, r"\d+").unwrap());
        let tokens = tokenize_generic(&lang, "if 7");
        assert_eq!(classes(&tokens), vec![(None, "if "), (Some(TokenClass::Number), "7")]);
    }

    #[test]
    fn test_empty_language_is_plain() {
        let lang = LanguageDefinition::new("empty");
        let tokens = tokenize_generic(&lang, "anything <at> all");
        assert_eq!(classes(&tokens), vec![(None, "anything <at> all")]);
    }

    #[test]
    fn test_literal_placeholder_chars_round_trip() {
        let text = "if \u{F0000}\u{F0001} 1 \u{10FFFD} \"\u{F0002}\"";
        let tokens = tokenize_generic(&test_language(), text);
        assert_eq!(concat(&tokens), text);
        assert!(tokens
            .iter()
            .filter(|t| t.text.chars().any(is_placeholder))
            .all(|t| t.class.is_none() || t.class == Some(TokenClass::String)));
    }

    #[test]
    fn test_underscores_next_to_digits() {
        let text = "__HIGHLIGHT_0__ a_1_b __STRING_12__ 5";
        let tokens = tokenize_generic(&test_language(), text);
        assert_eq!(concat(&tokens), text);
        let numbers: Vec<_> = tokens
            .iter()
            .filter(|t| t.class == Some(TokenClass::Number))
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(numbers, vec!["5"]);
    }

    #[test]
    fn test_slot_mapping() {
        assert_eq!(slot_char(0), Some('\u{F0000}'));
        assert_eq!(slot_index('\u{F0000}'), Some(0));
        let last_a = slot_char(PLANE_SLOTS - 1).unwrap();
        assert_eq!(last_a, '\u{FFFFD}');
        assert_eq!(slot_char(PLANE_SLOTS), Some('\u{100000}'));
        assert_eq!(slot_index('\u{100000}'), Some(PLANE_SLOTS));
        assert_eq!(slot_char(2 * PLANE_SLOTS), None);
        assert_eq!(slot_index('a'), None);
        assert!(is_placeholder('\u{FFFFF}'));
        assert!(!is_placeholder('\u{E000}'));
    }

    #[test]
    fn test_exhausted_slots_leave_rest_plain() {
        let mut lang = LanguageDefinition::new("digits");
        lang.add_pattern(PatternRule::new(Category::Numbers, r"\d").unwrap());

        let extra = 10;
        let text = "7".repeat(2 * PLANE_SLOTS + extra);
        let tokens = tokenize_generic(&lang, &text);

        assert_eq!(concat(&tokens), text);
        assert_eq!(tokens.len(), 2 * PLANE_SLOTS + 1);
        assert_eq!(tokens[0], Token::classified(TokenClass::Number, "7"));
        let last = tokens.last().unwrap();
        assert_eq!(last.class, None);
        assert_eq!(last.text, "7".repeat(extra));
    }

    #[test]
    fn test_too_many_literal_placeholders() {
        let text = format!("{} x = 1 # c", "\u{F0001}".repeat(2 * PLANE_SLOTS + 1));

        let tokens = tokenize_generic(&test_language(), &text);
        assert_eq!(tokens, vec![Token::plain(&text)]);

        let hl = Highlighter::new();
        for lang in ["python", "json"] {
            let tokens = hl.tokenize(&text, lang);
            assert_eq!(tokens, vec![Token::plain(&text)], "{lang}");
        }
    }

    #[test]
    fn test_highlight_unknown_language_passthrough() {
        let hl = Highlighter::new();
        let text = "<b>if</b> & \"x\"";
        assert_eq!(hl.highlight(text, "nonexistent-lang"), escape_html(text));
        assert_eq!(hl.highlight("", "python"), "");
    }

    #[test]
    fn test_highlight_html_shape() {
        let hl = Highlighter::new();
        let html = hl.highlight("x = \"if\" # a < b", "python");
        assert_eq!(
            html,
            "x = <span class=\"syntax-string\">\"if\"</span> \
             <span class=\"syntax-comment\"># a &lt; b</span>"
        );
    }

    #[test]
    fn test_class_prefix() {
        let hl = Highlighter::new().with_class_prefix("hl-");
        assert_eq!(hl.highlight("42", "python"), "<span class=\"hl-number\">42</span>");
    }

    #[test]
    fn test_lossless_for_every_builtin() {
        let hl = Highlighter::new();
        let samples = [
            "procedure Foo(var x: Integer); begin x := x + 1; // done\nend;",
            "Get-ChildItem -Path $env:TEMP | Where-Object { $_.Length -gt 100 } # big",
            "{\"a\": [1, 2.5e3, true, null], \"b\": \"x\\\"y\"}",
            "@decorator\ndef f(x=1):\n    return len('s') # c\n\"\"\"doc\n\"\"\"",
            "[Serializable] public class A { string s = @\"x\"; /* c */ int F() { return 0x1; } }",
            "<?xml version=\"1.0\"?>\n<a b='c'><!-- x --><![CDATA[<y>]]></a>",
            "SELECT count(*) FROM t WHERE a <> 'b' -- c\n/* d */",
            "# Title\n**bold** _it_ `code` [l](u)\n- item\n> quote",
            ".a, #b { color: #fff; margin: 10px; } /* c */ @media { x: url(\"y\") }",
            "a < b && c > d & __HIGHLIGHT_1__ \u{F0005}",
        ];
        for lang in hl.catalog().list_languages() {
            for sample in samples {
                let html = hl.highlight(sample, lang);
                assert_eq!(unescape_html(&strip_tags(&html)), sample, "{lang}: {sample}");
                let tokens = hl.tokenize(sample, lang);
                assert_eq!(concat(&tokens), sample, "{lang}: {sample}");
            }
        }
    }

    #[test]
    fn test_no_nested_wrappers() {
        let hl = Highlighter::new();
        let html = hl.highlight("SELECT 'select 1' FROM t -- 'x' 2", "sql");
        let mut depth = 0i32;
        let mut rest = html.as_str();
        while let Some(idx) = rest.find('<') {
            rest = &rest[idx..];
            if rest.starts_with("</span>") {
                depth -= 1;
            } else if rest.starts_with("<span") {
                depth += 1;
                assert!(depth <= 1, "nested span in {html}");
            }
            rest = &rest[1..];
        }
        assert_eq!(depth, 0);
    }
}
