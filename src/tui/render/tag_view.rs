use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::COLOR_PALETTE;
use crate::tui::app::{App, TagField};

use super::helpers::field_spans;

pub fn render_tag_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let form = &app.tag_form;
    let pad = || Span::styled("   ", Style::default().bg(bg));

    let heading = |label: &'static str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let marker = if focused { " \u{25B8} " } else { "   " };
        Line::from(vec![Span::styled(marker, style), Span::styled(label, style)])
    };

    let mut label_line = vec![pad()];
    label_line.extend(field_spans(
        &form.label,
        form.focus == TagField::Label,
        Style::default().fg(app.theme.text_bright).bg(bg),
        Style::default().fg(app.theme.highlight).bg(bg),
    ));

    // Swatches; the selected one is bracketed
    let mut swatches = vec![pad()];
    for (i, hex) in COLOR_PALETTE.iter().enumerate() {
        let color = app.theme.tag_color(hex);
        let selected = i == form.color_index;
        let edge = if selected { "[" } else { " " };
        swatches.push(Span::styled(
            edge,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        swatches.push(Span::styled(
            "\u{2588}\u{2588}",
            Style::default().fg(color).bg(bg),
        ));
        swatches.push(Span::styled(
            if selected { "]" } else { " " },
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let save_style = if form.can_save() {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let lines = vec![
        Line::from(""),
        heading("Label", form.focus == TagField::Label),
        Line::from(label_line),
        Line::from(""),
        heading("Color", form.focus == TagField::Color),
        Line::from(swatches),
        Line::from(Span::styled(
            format!("   {}", COLOR_PALETTE[form.color_index % COLOR_PALETTE.len()]),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            pad(),
            Span::styled("Save (Enter)", save_style),
            Span::styled("   ", Style::default().bg(bg)),
            Span::styled("Cancel (Esc)", Style::default().fg(app.theme.text).bg(bg)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
