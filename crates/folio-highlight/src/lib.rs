//! Terminal styling for folio.
//!
//! Syntax highlighting for the TOML and JSON folio prints, plus small helpers
//! for headers, status lines and search hits.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights structured text for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML from the two-face extras.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML, as printed by `folio config` and `folio init`.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights JSON search results.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights content in the named syntax; unknown syntaxes pass through as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));
        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text, for headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green text, for success.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text, for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text, for errors.
    pub const RED: &str = "\x1b[31m";
    /// Reverse video, for search hits.
    pub const REVERSE: &str = "\x1b[7m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in a style and a trailing reset.
fn styled(style: &str, text: &str) -> String {
    format!("{style}{text}{}", colors::RESET)
}

/// Formats a header in bold cyan.
pub fn header(text: &str) -> String {
    styled(&format!("{}{}", colors::BOLD, colors::CYAN), text)
}

/// Formats text dimmed.
pub fn dim(text: &str) -> String {
    styled(colors::DIM, text)
}

/// Formats a success message in green.
pub fn success(text: &str) -> String {
    styled(colors::GREEN, text)
}

/// Formats a warning in yellow.
pub fn warning(text: &str) -> String {
    styled(colors::YELLOW, text)
}

/// Formats an error in red.
pub fn error(text: &str) -> String {
    styled(colors::RED, text)
}

/// Replaces highlight markers in result text with bold reverse video.
///
/// An opening marker without a matching close is left as is.
pub fn emphasize_hits(text: &str, open: &str, close: &str) -> String {
    if open.is_empty() || close.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(colors::BOLD);
        out.push_str(colors::REVERSE);
        out.push_str(&after_open[..end]);
        out.push_str(colors::RESET);
        rest = &after_open[end + close.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_toml() {
        let output = Highlighter::new().highlight_toml("[search]\nword_padding = 2\n");
        assert!(output.contains("\x1b["));
        assert!(output.ends_with(colors::RESET));
    }

    #[test]
    fn test_highlight_json() {
        let output = Highlighter::new().highlight_json("{\"text\": \"fox\", \"par\": []}\n");
        assert!(output.contains("\x1b[38;2;"));
        assert!(output.contains("fox"));
    }

    #[test]
    fn test_unknown_syntax_passes_text_through() {
        let output = Highlighter::new().highlight("plain words", "no-such-syntax");
        assert!(output.contains("plain words"));
    }

    #[test]
    fn test_header_formatting() {
        let h = header("Pages");
        assert!(h.starts_with("\x1b[1m\x1b[36m"));
        assert!(h.ends_with(colors::RESET));
        assert!(h.contains("Pages"));
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(warning("w"), "\x1b[33mw\x1b[0m");
        assert_eq!(error("e"), "\x1b[31me\x1b[0m");
        assert_eq!(success("s"), "\x1b[32ms\x1b[0m");
        assert_eq!(dim("d"), "\x1b[2md\x1b[0m");
    }

    #[test]
    fn test_emphasize_hits() {
        let out = emphasize_hits("the {{{quick}}} {{{fox}}}", "{{{", "}}}");
        assert_eq!(
            out,
            "the \x1b[1m\x1b[7mquick\x1b[0m \x1b[1m\x1b[7mfox\x1b[0m"
        );
    }

    #[test]
    fn test_emphasize_unbalanced_marker() {
        assert_eq!(emphasize_hits("a {{{b", "{{{", "}}}"), "a {{{b");
        assert_eq!(emphasize_hits("a {{{b}}}", "", ""), "a {{{b}}}");
    }

    #[test]
    fn test_toml_and_json_syntaxes_available() {
        let syntaxes = extra_syntaxes();
        assert!(syntaxes.find_syntax_by_extension("toml").is_some());
        assert!(syntaxes.find_syntax_by_extension("json").is_some());
    }
}
