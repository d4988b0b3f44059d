use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, NoteField};
use crate::tui::field::TextField;
use crate::util::text;

use super::helpers::{field_lines, spans_width};

pub fn render_note_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let form = &app.note;

    let mut lines: Vec<Line> = vec![Line::from("")];
    let text_fields: [(&str, &TextField, NoteField); 3] = [
        ("Title", &form.title, NoteField::Title),
        ("Description", &form.description, NoteField::Description),
        ("Due date (YYYY-MM-DD)", &form.due_date, NoteField::DueDate),
    ];
    for (label, field, which) in text_fields {
        let focused = form.focus == which;
        lines.push(label_line(app, label, focused));
        lines.extend(field_lines(
            field,
            focused,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
            Span::styled("   ", Style::default().bg(bg)),
            width,
        ));
        lines.push(Line::from(""));
    }

    lines.push(label_line(app, "Tags", form.focus == NoteField::Tags));
    lines.extend(chip_lines(app, width));
    lines.push(Line::from(""));

    // Action buttons
    let enabled = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(app.theme.dim).bg(bg);
    let mut actions = vec![
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            "Save (Ctrl-S)",
            if form.can_save() { enabled } else { disabled },
        ),
    ];
    if app.ctl.is_editing() {
        actions.push(Span::styled("   ", Style::default().bg(bg)));
        actions.push(Span::styled(
            "Delete (Ctrl-D)",
            Style::default().fg(app.theme.red).bg(bg),
        ));
    }
    lines.push(Line::from(actions));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn label_line(app: &App, label: &str, focused: bool) -> Line<'static> {
    let bg = app.theme.background;
    let (marker, style) = if focused {
        (
            " \u{25B8} ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("   ", Style::default().fg(app.theme.dim).bg(bg))
    };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(label.to_string(), style),
    ])
}

/// Tag chips, wrapped to the available width, with a trailing "+ new" chip.
/// The highlighted tag is drawn filled; the others as colored text.
fn chip_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let indent = || Span::styled("   ", Style::default().bg(bg));
    let focused = app.note.focus == NoteField::Tags;

    let mut chips: Vec<Span<'static>> = app
        .ctl
        .tags()
        .iter()
        .map(|tag| {
            let color = app.theme.tag_color(&tag.color);
            let label = text::truncate_to_width(&tag.label, width.saturating_sub(8));
            if app.note.tag_id.as_deref() == Some(tag.id.as_str()) {
                let style = Style::default().fg(bg).bg(color);
                let style = if focused {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                };
                Span::styled(format!("[{}]", label), style)
            } else {
                Span::styled(format!(" {} ", label), Style::default().fg(color).bg(bg))
            }
        })
        .collect();
    chips.push(Span::styled(
        " + new ",
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let mut lines = Vec::new();
    let mut current = vec![indent()];
    for chip in chips {
        let chip_w = text::display_width(&chip.content) + 1;
        if spans_width(&current) + chip_w > width && current.len() > 1 {
            lines.push(Line::from(std::mem::replace(&mut current, vec![indent()])));
        }
        current.push(chip);
        current.push(Span::styled(" ", Style::default().bg(bg)));
    }
    lines.push(Line::from(current));
    lines
}
