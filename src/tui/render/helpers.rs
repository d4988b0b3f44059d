use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::field::TextField;
use crate::util::text;

/// Cursor glyph for the focused text field
pub(super) const CURSOR: &str = "\u{258C}";

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| text::display_width(&s.content)).sum()
}

/// Spans for a text field, with the cursor drawn when focused
pub(super) fn field_spans(
    field: &TextField,
    focused: bool,
    style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    if !focused {
        return vec![Span::styled(field.value().to_string(), style)];
    }
    let (before, after) = field.value().split_at(field.cursor());
    let mut spans = vec![Span::styled(before.to_string(), style)];
    spans.push(Span::styled(CURSOR, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), style));
    }
    spans
}

/// A text field laid out over as many lines as it needs: breaks at embedded
/// newlines and hard-wraps at `width`. Every line starts with `indent`.
pub(super) fn field_lines(
    field: &TextField,
    focused: bool,
    style: Style,
    cursor_style: Style,
    indent: Span<'static>,
    width: usize,
) -> Vec<Line<'static>> {
    let indent_w = text::display_width(&indent.content);
    let mut lines = Vec::new();
    let mut current = vec![indent.clone()];

    for span in field_spans(field, focused, style, cursor_style) {
        let mut chunk = String::new();
        for g in span.content.graphemes(true) {
            let newline = g == "\n" || g == "\r\n";
            let used = spans_width(&current) + text::display_width(&chunk);
            if newline || (used + text::display_width(g) > width && used > indent_w) {
                current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                lines.push(Line::from(std::mem::replace(&mut current, vec![indent.clone()])));
            }
            if !newline {
                chunk.push_str(g);
            }
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, span.style));
        }
    }
    lines.push(Line::from(current));
    lines
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Every line (including the first) is prefixed with `indent`.
pub(super) fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = text::display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_len = indent_len;

    for word in text.split_whitespace() {
        let word_len = text::display_width(word);
        let space = if current_len == indent_len { 0 } else { 1 };
        if current_len + space + word_len > max_width && current_len > indent_len {
            lines.push(current);
            current = indent.to_string();
            current_len = indent_len;
        }
        if current_len > indent_len {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
