//! Comment removal by pattern matching.
//!
//! This is not a tokenizer. String and regular-expression literals are not
//! recognized, so `"a // b"` or `'/* x */'` inside code lose their tail just
//! like a real comment would. The one exception is a `//` directly preceded
//! by `:`, which keeps `http://` and `https://` intact.

use regex::Regex;
use std::sync::LazyLock;

/// `/* ... */`, shortest match, may span lines.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid regex"));

/// `//` to end of line, together with any whitespace (newlines included) before it.
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*//.*").expect("Invalid regex"));

/// `<!-- ... -->`, shortest match, may span lines.
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid regex"));

/// Comment syntax applied to a file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* */` and `//`
    CFamily,
    /// `<!-- -->`, then the C-family pass for inline scripts and styles
    Markup,
}

impl CommentStyle {
    /// Unknown extensions get the C-family treatment.
    pub fn for_extension(ext: &str) -> Self {
        match ext {
            "html" | "htm" => CommentStyle::Markup,
            _ => CommentStyle::CFamily,
        }
    }
}

/// Remove comments from `text` according to the style for `ext`.
pub fn strip_comments(text: &str, ext: &str) -> String {
    match CommentStyle::for_extension(ext) {
        CommentStyle::CFamily => strip_c_comments(text),
        CommentStyle::Markup => strip_c_comments(&strip_html_comments(text)),
    }
}

pub fn strip_html_comments(text: &str) -> String {
    HTML_COMMENT.replace_all(text, "").into_owned()
}

/// Remove `/* */` blocks, then `//` line comments not preceded by `:`.
pub fn strip_c_comments(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = BLOCK_COMMENT.replace_all(&text, "");
    strip_line_comments(&text)
}

fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(found) = LINE_COMMENT.find_at(text, search) {
        if text[..found.start()].ends_with(':') {
            // Protocol separator; retry one character further on
            search = found.start() + next_char_len(text, found.start());
            continue;
        }
        out.push_str(&text[copied..found.start()]);
        copied = found.end();
        search = found.end();
    }

    out.push_str(&text[copied..]);
    out
}

fn next_char_len(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(1, char::len_utf8)
}
