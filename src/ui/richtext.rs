//! Rich-text document model.
//!
//! Advisories are written in a tiny HTML subset: text, `<a href>`, `<br>`,
//! `<p>`, `<b>`/`<strong>` and the common character entities. [`RichText`]
//! parses that subset into paragraphs of [`Run`]s which the terminal
//! renderer and the dialog backend walk. Unknown tags are dropped and their
//! text kept.
//!
//! # Example
//!
//! ```
//! use nanny::ui::richtext::{RichText, Run};
//!
//! let doc = RichText::parse("See the <a href=\"https://example.com\">terms</a>.<br>Thanks");
//! assert_eq!(doc.paragraphs.len(), 1);
//! assert_eq!(
//!     doc.paragraphs[0].runs[1],
//!     Run::Link { href: "https://example.com".into(), text: "terms".into() }
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/?)\s*([A-Za-z][A-Za-z0-9]*)([^>]*)>").expect("valid tag regex")
});

static HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).expect("valid href regex")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z]+);").expect("valid entity regex")
});

/// A span of uniformly formatted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Plain text, optionally bold.
    Text { text: String, bold: bool },
    /// A hyperlink and its display text.
    Link { href: String, text: String },
    /// A forced line break inside a paragraph.
    LineBreak,
}

/// An ordered sequence of runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

/// A parsed rich-text document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub paragraphs: Vec<Paragraph>,
}

impl RichText {
    /// Parse rich-text markup.
    pub fn parse(markup: &str) -> Self {
        let mut builder = Builder::default();
        let mut cursor = 0;

        for caps in TAG.captures_iter(markup) {
            let Some(tag) = caps.get(0) else { continue };
            builder.text(&markup[cursor..tag.start()]);
            cursor = tag.end();

            let closing = !caps[1].is_empty();
            let name = caps[2].to_ascii_lowercase();
            match (name.as_str(), closing) {
                ("a", false) => builder.open_link(href_of(&caps[3])),
                ("a", true) => builder.close_link(),
                ("br", _) => builder.line_break(),
                ("p", _) => builder.end_paragraph(),
                ("b" | "strong", false) => builder.bold += 1,
                ("b" | "strong", true) => builder.bold = builder.bold.saturating_sub(1),
                _ => {}
            }
        }
        builder.text(&markup[cursor..]);
        builder.finish()
    }

    /// Whether the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// All hyperlinks as `(href, text)` pairs, in document order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter_map(|run| match run {
                Run::Link { href, text } => Some((href.as_str(), text.as_str())),
                _ => None,
            })
    }
}

#[derive(Default)]
struct Builder {
    paragraphs: Vec<Paragraph>,
    runs: Vec<Run>,
    link: Option<(String, String)>,
    bold: usize,
}

impl Builder {
    fn text(&mut self, raw: &str) {
        let collapsed = collapse_whitespace(raw);
        if collapsed.is_empty() {
            return;
        }

        if let Some((_, text)) = &mut self.link {
            push_collapsed(text, &collapsed);
            return;
        }

        let at_line_start = matches!(self.runs.last(), None | Some(Run::LineBreak));
        let bold = self.bold > 0;
        match self.runs.last_mut() {
            Some(Run::Text { text, bold: b }) if *b == bold => push_collapsed(text, &collapsed),
            _ => {
                let text = if at_line_start {
                    collapsed.trim_start().to_string()
                } else {
                    collapsed
                };
                if !text.is_empty() {
                    self.runs.push(Run::Text { text, bold });
                }
            }
        }
    }

    fn open_link(&mut self, href: String) {
        self.close_link();
        self.link = Some((href, String::new()));
    }

    fn close_link(&mut self) {
        let Some((href, text)) = self.link.take() else {
            return;
        };
        let text = text.trim().to_string();
        if href.is_empty() {
            self.text(&text);
        } else if !text.is_empty() {
            self.runs.push(Run::Link { href, text });
        }
    }

    fn line_break(&mut self) {
        self.close_link();
        self.trim_trailing_space();
        self.runs.push(Run::LineBreak);
    }

    fn end_paragraph(&mut self) {
        self.close_link();
        self.trim_trailing_space();
        if !self.runs.is_empty() {
            self.paragraphs.push(Paragraph {
                runs: std::mem::take(&mut self.runs),
            });
        }
    }

    fn trim_trailing_space(&mut self) {
        if let Some(Run::Text { text, .. }) = self.runs.last_mut() {
            let trimmed = text.trim_end().len();
            text.truncate(trimmed);
            if text.is_empty() {
                self.runs.pop();
            }
        }
    }

    fn finish(mut self) -> RichText {
        self.end_paragraph();
        RichText {
            paragraphs: self.paragraphs,
        }
    }
}

/// Append `next` to `text` without producing a double space.
fn push_collapsed(text: &mut String, next: &str) {
    if text.ends_with(' ') || text.is_empty() {
        text.push_str(next.strip_prefix(' ').unwrap_or(next));
    } else {
        text.push_str(next);
    }
}

/// Collapse ASCII whitespace runs to single spaces and decode entities.
fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    decode_entities(&out)
}

fn href_of(attributes: &str) -> String {
    HREF.captures(attributes)
        .and_then(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
        .map(|m| decode_entities(m.as_str()))
        .unwrap_or_default()
}

/// Decode the character entities the formatter produces, plus numeric ones.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => entity.strip_prefix('#').and_then(|num| {
                    let code = match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// Escape text for inclusion in rich-text markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
