//! Minimal Markdown → HTML conversion for chat bubbles.
//!
//! Only bold, italics, inline code and line breaks are recognised. Input is
//! HTML-escaped before any substitution, so the output never contains markup
//! that came from the text itself.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic regex"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code regex"));

pub fn to_html(text: &str) -> String {
    let escaped = escape_html(text);
    let html = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = CODE.replace_all(&html, "<code>$1</code>");
    html.replace('\n', "<br>")
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A run of text with uniform styling, for painting converted HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

/// Split the output of [`to_html`] back into styled text runs.
///
/// Understands exactly the subset `to_html` produces. `<br>` becomes a
/// newline and entities are decoded.
pub fn segments(html: &str) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    let mut strong = 0u32;
    let mut emphasis = 0u32;
    let mut code = 0u32;
    let mut text = String::new();
    let mut rest = html;

    let flush = |text: &mut String, out: &mut Vec<Segment>, s: u32, e: u32, c: u32| {
        if !text.is_empty() {
            out.push(Segment {
                text: std::mem::take(text),
                strong: s > 0,
                emphasis: e > 0,
                code: c > 0,
            });
        }
    };

    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            if let Some(end) = rest.find('>') {
                let tag = &rest[1..end];
                let known = matches!(
                    tag,
                    "strong" | "/strong" | "em" | "/em" | "code" | "/code" | "br"
                );
                if known {
                    if tag == "br" {
                        text.push('\n');
                    } else {
                        flush(&mut text, &mut out, strong, emphasis, code);
                        match tag {
                            "strong" => strong += 1,
                            "/strong" => strong = strong.saturating_sub(1),
                            "em" => emphasis += 1,
                            "/em" => emphasis = emphasis.saturating_sub(1),
                            "code" => code += 1,
                            _ => code = code.saturating_sub(1),
                        }
                    }
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        } else if ch == '&' {
            let entity = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>')]
                .into_iter()
                .find(|(name, _)| rest.starts_with(name));
            if let Some((name, decoded)) = entity {
                text.push(decoded);
                rest = &rest[name.len()..];
                continue;
            }
        }
        text.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    flush(&mut text, &mut out, strong, emphasis, code);
    out
}
