//! HTML emission for rendered note content
//!
//! Reproduces the note viewer's styling: list items for bullets,
//! emphasized/tinted/boxed paragraph blocks and a gold highlight span.
//! All text is escaped before it is placed into markup, and highlight
//! spans nest inside the role markup of their line.

use super::{render, LineRole, RenderedLine, Segment};

const HIGHLIGHT_STYLE: &str = "background-color: #FFD700; font-weight: bold;";
const IMPORTANT_STYLE: &str = "font-weight: bold; color: #2c3e50; margin-top: 10px;";
const RULE_STYLE: &str = "color: #3498db; margin-left: 20px;";
const BOXED_STYLE: &str = "background-color: #f8f9fa; padding: 8px; border-radius: 5px;";
const BODY_STYLE: &str = "font-family: Arial, sans-serif; line-height: 1.6;";

/// Render note content straight to the HTML shown in the note viewer
pub fn render_html(content: &str, search_term: Option<&str>) -> String {
    let mut body = String::new();
    for line in render(content, search_term) {
        emit_line(&mut body, &line);
    }

    format!("<html><body style=\"{}\">{}</body></html>", BODY_STYLE, body)
}

fn emit_line(out: &mut String, line: &RenderedLine) {
    match line.role {
        LineRole::Bullet => {
            out.push_str("<li>");
            emit_segments(out, &line.segments);
            out.push_str("</li>");
        }
        LineRole::Important => emit_styled(out, IMPORTANT_STYLE, &line.segments),
        LineRole::Rule => emit_styled(out, RULE_STYLE, &line.segments),
        LineRole::Boxed => emit_styled(out, BOXED_STYLE, &line.segments),
        LineRole::Paragraph => {
            out.push_str("<p>");
            emit_segments(out, &line.segments);
            out.push_str("</p>");
        }
        LineRole::Blank => out.push_str("<br>"),
    }
}

fn emit_styled(out: &mut String, style: &str, segments: &[Segment]) {
    out.push_str("<p style=\"");
    out.push_str(style);
    out.push_str("\">");
    emit_segments(out, segments);
    out.push_str("</p>");
}

fn emit_segments(out: &mut String, segments: &[Segment]) {
    for segment in segments {
        if segment.highlighted {
            out.push_str("<span style=\"");
            out.push_str(HIGHLIGHT_STYLE);
            out.push_str("\">");
            escape_into(out, &segment.text);
            out.push_str("</span>");
        } else {
            escape_into(out, &segment.text);
        }
    }
}

/// Minimal HTML escaping for text placed inside markup
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
