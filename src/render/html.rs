//! HTML rendering
//!
//! Plain tokens are escaped as-is; classified tokens are escaped and
//! wrapped in `<span class="{prefix}{class}">`. Only `&`, `<` and `>` are
//! escaped, which is all that text content inside an element needs.

use crate::syntax::Token;

/// Escape text for use as element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Render tokens as an HTML fragment
pub fn to_html(tokens: &[Token], class_prefix: &str) -> String {
    let len: usize = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(len + tokens.len() * 32);

    for token in tokens {
        match token.class {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class_prefix);
                out.push_str(class.name());
                out.push_str("\">");
                push_escaped(&mut out, &token.text);
                out.push_str("</span>");
            }
            None => push_escaped(&mut out, &token.text),
        }
    }

    out
}

/// Wrap a highlighted fragment in `<pre><code>` with a language class
pub fn wrap_block(fragment: &str, language: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        escape_html(language).replace('"', "&quot;"),
        fragment
    )
}

/// Remove all markup tags, leaving escaped text content
#[cfg(test)]
pub(crate) fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Reverse [`escape_html`]
#[cfg(test)]
pub(crate) fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenClass;

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; \"d\"");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_to_html() {
        let tokens = vec![
            Token::classified(TokenClass::Keyword, "if"),
            Token::plain(" a<b "),
            Token::classified(TokenClass::String, "'&'"),
        ];
        assert_eq!(
            to_html(&tokens, "syntax-"),
            "<span class=\"syntax-keyword\">if</span> a&lt;b \
             <span class=\"syntax-string\">'&amp;'</span>"
        );
        assert_eq!(to_html(&[], "syntax-"), "");
    }

    #[test]
    fn test_no_raw_specials_outside_markup() {
        let tokens = vec![
            Token::plain("<&>"),
            Token::classified(TokenClass::Operator, "<>"),
        ];
        let html = to_html(&tokens, "x-");
        let text = strip_tags(&html);
        assert!(!text.contains('<') && !text.contains('>'));
        assert!(text.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "").find('&').is_none());
    }

    #[test]
    fn test_strip_and_unescape() {
        let html = "<span class=\"a\">&lt;b&gt;</span> &amp;lt;";
        assert_eq!(unescape_html(&strip_tags(html)), "<b> &lt;");
    }

    #[test]
    fn test_wrap_block() {
        assert_eq!(
            wrap_block("<span class=\"syntax-number\">1</span>", "json"),
            "<pre><code class=\"language-json\"><span class=\"syntax-number\">1</span></code></pre>"
        );
    }
}
