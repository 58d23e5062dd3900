use regex::Regex;
use std::sync::LazyLock;

use super::filter::ExtensionFilter;
use super::normalize::normalize;
use super::strip::strip_comments;

/// Fixed line inserted after each header with `--keep-markers`.
pub const MARKER_LINE: &str = "=== TELL_EVERY_TIME_PLACEHOLDER ===";

/// Body used when nothing is left of a file after cleaning.
pub const EMPTY_PLACEHOLDER: &str = "<empty or comment-only file>";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// How sections are rendered and joined
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    pub keep_markers: bool,
    pub minify: bool,
}

/// One digested archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub body: String,
}

impl Section {
    /// Strip comments from `text`, normalize it, and substitute the
    /// placeholder when nothing remains.
    pub fn from_text(name: &str, ext: &str, text: &str) -> Self {
        let body = normalize(&strip_comments(text, ext));
        let body = if body.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            body
        };
        Self {
            name: name.to_string(),
            body,
        }
    }

    pub fn header(&self) -> String {
        format!("===== FILE: {} =====", self.name)
    }

    pub fn render(&self, options: AssembleOptions) -> String {
        let header = self.header();
        let rest = if options.keep_markers {
            format!("{}\n{}", MARKER_LINE, self.body)
        } else {
            self.body.clone()
        };

        if options.minify {
            // The header stays on a line of its own; only the rest is compacted
            format!("{}\n{}", header, compact(&rest))
        } else {
            format!("{}\n{}", header, rest)
        }
    }
}

/// Newlines to spaces, then a single pass halving doubled spaces.
fn compact(text: &str) -> String {
    text.replace('\n', " ").replace("  ", " ").trim().to_string()
}

/// Join rendered sections into the final document.
pub fn assemble(sections: &[Section], options: AssembleOptions) -> String {
    let rendered: Vec<String> = sections.iter().map(|s| s.render(options)).collect();
    let combined = rendered.join("\n\n");
    let combined = combined.trim();

    if options.minify {
        WHITESPACE_RUN.replace_all(combined, " ").trim().to_string()
    } else {
        combined.to_string()
    }
}

/// Report written instead of a digest when no entry matched.
pub fn diagnostic_listing(filter: &ExtensionFilter, names: &[String]) -> String {
    format!(
        "No matching files found in ZIP for extensions: {}\nZIP contents:\n{}",
        filter,
        names.join("\n")
    )
}
