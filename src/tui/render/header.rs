use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::tui::app::App;
use crate::util::text;

use super::helpers::spans_width;

fn screen_title(app: &App) -> &'static str {
    match app.ctl.screen() {
        Screen::Login => "Sign in",
        Screen::Welcome => "Welcome",
        Screen::Home => "My tasks",
        Screen::EditNote if app.ctl.is_editing() => "Edit note",
        Screen::EditNote => "New note",
        Screen::EditTag => "New tag",
    }
}

/// App name, screen title and the signed-in email, over a separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(
            " MyTask",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            screen_title(app),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ];

    if let Some(email) = app.ctl.identity() {
        let used = spans_width(&spans);
        let room = width.saturating_sub(used + 2);
        let email = text::truncate_to_width(email, room);
        let email_w = text::display_width(&email);
        if email_w > 0 {
            let pad = width.saturating_sub(used + email_w + 1);
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
            spans.push(Span::styled(
                email,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
