//! Content renderer
//!
//! Turns raw note text into structured display lines. Each line is
//! classified by its leading glyph marker, and every case-insensitive
//! occurrence of an optional search term is wrapped in a highlight
//! segment without disturbing the surrounding markup.

mod html;

pub use html::render_html;

use serde::Serialize;

/// Display role of a single line, decided by its leading glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineRole {
    /// `•` list item; the marker is stripped from the displayed text
    Bullet,
    /// `📌` / `🎵` / `❗` emphasized block
    Important,
    /// `🔢` / `🎯` indented, tinted block
    Rule,
    /// `📅` / `📝` boxed block
    Boxed,
    /// Any other non-empty line
    Paragraph,
    /// Empty line kept as vertical spacing
    Blank,
}

/// A run of text within a line, highlighted or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    fn highlight(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// One classified, highlighted line of note content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub role: LineRole,
    pub segments: Vec<Segment>,
}

/// Render note content into classified lines, highlighting every
/// case-insensitive occurrence of `search_term`. An empty or absent term
/// renders without highlighting. Lines come out in input order; nothing
/// is merged or reordered.
pub fn render(content: &str, search_term: Option<&str>) -> Vec<RenderedLine> {
    let term = search_term.filter(|t| !t.is_empty());

    content
        .split('\n')
        .map(|line| {
            let (role, text) = classify(line);
            let segments = match (role, term) {
                (LineRole::Blank, _) => Vec::new(),
                (_, Some(term)) => highlight_matches(&text, term),
                (_, None) => vec![Segment::plain(text)],
            };
            RenderedLine { role, segments }
        })
        .collect()
}

/// Classify a line by its leading glyph and produce the text to display.
/// The bullet marker is stripped and the remainder re-trimmed; every
/// other role keeps the line as written. Classification always inspects
/// the raw line, so a highlighted term can never change a line's role.
fn classify(line: &str) -> (LineRole, String) {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        (LineRole::Blank, String::new())
    } else if let Some(rest) = trimmed.strip_prefix('•') {
        (LineRole::Bullet, rest.trim().to_string())
    } else if starts_with_any(trimmed, &['📌', '🎵', '❗']) {
        (LineRole::Important, line.to_string())
    } else if starts_with_any(trimmed, &['🔢', '🎯']) {
        (LineRole::Rule, line.to_string())
    } else if starts_with_any(trimmed, &['📅', '📝']) {
        (LineRole::Boxed, line.to_string())
    } else {
        (LineRole::Paragraph, line.to_string())
    }
}

fn starts_with_any(s: &str, glyphs: &[char]) -> bool {
    s.chars().next().map_or(false, |c| glyphs.contains(&c))
}

/// Split `text` into plain and highlighted segments. Matching is
/// case-insensitive and non-overlapping: the scan resumes immediately
/// after each match, and the matched slice keeps its original casing.
fn highlight_matches(text: &str, term: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = chars.iter().map(|c| fold_char(*c)).collect();
    let needle: Vec<char> = term.chars().map(fold_char).collect();

    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        if i + needle.len() <= chars.len() && lowered[i..i + needle.len()] == needle[..] {
            if !plain.is_empty() {
                segments.push(Segment::plain(std::mem::take(&mut plain)));
            }
            let matched: String = chars[i..i + needle.len()].iter().collect();
            segments.push(Segment::highlight(matched));
            i += needle.len();
        } else {
            plain.push(chars[i]);
            i += 1;
        }
    }

    if !plain.is_empty() || segments.is_empty() {
        segments.push(Segment::plain(plain));
    }

    segments
}

/// Single-character case folding. Multi-character lowercase expansions
/// would desynchronize match positions from the original text, so only
/// the first mapped character is compared.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
