//! HTML output in the highlight.js class vocabulary, so existing
//! highlight.js themes style it unchanged.

use crate::lexer::tokens::{Category, Token};

pub fn scope(category: Category) -> Option<&'static str> {
    match category {
        Category::Keyword => Some("keyword"),
        Category::Builtin => Some("built_in"),
        Category::String => Some("string"),
        Category::Comment => Some("comment"),
        Category::NumberHex | Category::NumberBin | Category::NumberDec | Category::NumberFloat => {
            Some("number")
        }
        Category::Symbol => Some("symbol"),
        Category::Text => None,
    }
}

pub fn escape_html(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

pub fn render_html<I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token>,
{
    let mut out = String::new();

    for token in tokens {
        match scope(token.category) {
            Some(scope) => {
                out.push_str("<span class=\"hljs-");
                out.push_str(scope);
                out.push_str("\">");
                escape_html(&token.value, &mut out);
                out.push_str("</span>");
            }
            None => escape_html(&token.value, &mut out),
        }
    }

    out
}

/// Wraps rendered tokens in the `<pre><code>` block highlight.js emits.
pub fn render_document<I>(tokens: I, language: &str) -> String
where
    I: IntoIterator<Item = Token>,
{
    format!(
        "<pre><code class=\"hljs language-{}\">{}</code></pre>\n",
        language,
        render_html(tokens)
    )
}
