/// Right-trim every line, collapse runs of blank lines to one, and trim
/// the whole text.
///
/// Indentation is kept. The result never has trailing whitespace on a
/// line or two blank lines in a row, and feeding it back in returns it
/// unchanged.
pub fn normalize(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut prev_blank = false;

    for line in text.split('\n') {
        let line = line.trim_end();
        let blank = line.is_empty();
        if !(blank && prev_blank) {
            lines.push(line);
        }
        prev_blank = blank;
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_whitespace_is_removed() {
        assert_eq!(normalize("a;  \n  b;\t\n"), "a;\n  b;");
    }

    #[test]
    fn blank_runs_collapse_to_one() {
        assert_eq!(normalize("a\n\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n   \n\t\n \nb"), "a\n\nb");
    }

    #[test]
    fn leading_and_trailing_blank_lines_are_trimmed() {
        assert_eq!(normalize("\n\n  \nx = 1;\n\n\n"), "x = 1;");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize(" \n\t\n  "), "");
    }

    #[test]
    fn carriage_returns_count_as_trailing_whitespace() {
        assert_eq!(normalize("a\r\nb\r\n"), "a\nb");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "function f() {\n    return 1;   \n}\n\n\n\nf();\n",
            "\n\n<div>\n\n\n  <p>x</p>  \n</div>",
            "",
            "single",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
