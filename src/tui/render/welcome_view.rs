use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

pub fn render_welcome_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let email = app.ctl.identity().unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            "Welcome!",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            email.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Loading your tasks\u{2026}",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let inner = centered_rect_fixed(area.width, lines.len() as u16, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}
