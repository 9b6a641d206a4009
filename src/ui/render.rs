//! Terminal rendering of rich text.
//!
//! Without color, links collapse to their display text. With color, each
//! link becomes an OSC 8 hyperlink followed by the URL in parentheses for
//! terminals that ignore OSC 8, and bold runs get SGR bold. Either way the
//! output ends in exactly one newline.

use console::style;

use super::richtext::{RichText, Run};

/// OSC 8 introducer; `ESC ] 8 ; ;`.
const OSC8_OPEN: &str = "\x1b]8;;";

/// String terminator; `ESC \`.
const ST: &str = "\x1b\\";

/// Render rich-text markup for a terminal.
///
/// `colorize` is normally [`Settings::colorize`](crate::config::Settings),
/// i.e. false whenever `NO_COLOR` is set.
///
/// # Example
///
/// ```
/// use nanny::ui::render::to_terminal_text;
///
/// let markup = "Read the <a href=\"https://example.com/eula\">terms</a>";
/// assert_eq!(to_terminal_text(markup, false), "Read the terms\n");
/// assert!(to_terminal_text(markup, true).ends_with("terms\x1b]8;;\x1b\\(https://example.com/eula)\n"));
/// ```
pub fn to_terminal_text(markup: &str, colorize: bool) -> String {
    render(&RichText::parse(markup), colorize)
}

/// Render an already parsed document.
pub fn render(doc: &RichText, colorize: bool) -> String {
    let mut out = String::new();

    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for run in &paragraph.runs {
            match run {
                Run::Text { text, bold } => {
                    let text = normalize_separators(text);
                    if colorize && *bold {
                        out.push_str(&style(text).bold().force_styling(true).to_string());
                    } else {
                        out.push_str(&text);
                    }
                }
                Run::Link { href, text } if colorize => {
                    out.push_str(&hyperlink(href, &normalize_separators(text)));
                }
                Run::Link { text, .. } => out.push_str(&normalize_separators(text)),
                Run::LineBreak => out.push('\n'),
            }
        }
    }

    let content = out.trim_end_matches('\n').len();
    out.truncate(content);
    out.push('\n');
    out
}

/// OSC 8 hyperlink with a parenthesized URL fallback.
pub fn hyperlink(href: &str, text: &str) -> String {
    format!(
        "{open}{href}{st}{text}{open}{st}({href})",
        open = OSC8_OPEN,
        st = ST,
        href = href,
        text = text
    )
}

/// Turn Unicode line and paragraph separators into newlines.
fn normalize_separators(text: &str) -> String {
    text.replace(['\u{2028}', '\u{2029}'], "\n")
}
