//! Class-based syntax highlighting with syntect.
//!
//! Code is emitted as `<span class="hl-...">` runs so the page can switch
//! color themes with a stylesheet. [`highlight_css`] produces the
//! stylesheet for one of syntect's built-in themes.

use std::sync::LazyLock;

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

use crate::state::escape_html;

/// Prefix for every highlighting class.
pub const CSS_PREFIX: &str = "hl-";

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: CSS_PREFIX };

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Error generating a highlighting stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Theme name is not one of the built-in themes.
    #[error("unknown highlight theme '{name}' (available: {available})")]
    UnknownTheme {
        /// Requested theme.
        name: String,
        /// Comma-separated built-in theme names.
        available: String,
    },

    /// syntect failed to generate CSS.
    #[error("failed to generate highlight CSS")]
    Css(#[from] syntect::Error),
}

/// Append highlighted HTML for `code` to `out`.
///
/// The language is looked up by token (`rust`, `rs`, `py`, `js`, ...).
/// Unknown languages are highlighted as plain text. If syntect fails on
/// a line the code is written escaped without highlighting.
pub fn highlight(language: &str, code: &str, out: &mut String) {
    let syntax = SYNTAX_SET.find_syntax_by_token(language).unwrap_or_else(|| {
        debug!(language, "no syntax for language, using plain text");
        SYNTAX_SET.find_syntax_plain_text()
    });

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);
    for line in LinesWithEndings::from(code) {
        if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
            debug!(language, error = %err, "highlighting failed, writing plain code");
            out.push_str(&escape_html(code));
            return;
        }
    }
    out.push_str(&generator.finalize());
}

/// Names of the built-in themes, sorted.
pub fn available_themes() -> Vec<&'static str> {
    THEME_SET.themes.keys().map(String::as_str).collect()
}

/// Stylesheet for the `hl-` classes using a built-in theme.
pub fn highlight_css(theme: &str) -> Result<String, HighlightError> {
    let Some(theme_data) = THEME_SET.themes.get(theme) else {
        return Err(HighlightError::UnknownTheme {
            name: theme.to_owned(),
            available: available_themes().join(", "),
        });
    };
    Ok(css_for_theme_with_class_style(theme_data, CLASS_STYLE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_known_language_uses_classes() {
        let mut out = String::new();
        highlight("rust", "fn main() {}", &mut out);
        assert!(out.contains(r#"class="hl-"#));
        assert!(out.contains("main"));
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let mut out = String::new();
        highlight("python", "print('<b>')", &mut out);
        assert!(out.contains("&lt;b&gt;"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_highlight_unknown_language_keeps_text() {
        let mut out = String::new();
        highlight("no-such-language", "a < b", &mut out);
        assert!(out.contains("a &lt; b"));
    }

    #[test]
    fn test_default_theme_available() {
        assert!(available_themes().contains(&DEFAULT_THEME));
    }

    #[test]
    fn test_highlight_css_default_theme() {
        let css = highlight_css(DEFAULT_THEME).unwrap();
        assert!(css.contains(".hl-"));
    }

    #[test]
    fn test_highlight_css_unknown_theme() {
        let err = highlight_css("Nope").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownTheme { ref name, .. } if name == "Nope"));
        assert!(err.to_string().contains(DEFAULT_THEME));
    }
}
