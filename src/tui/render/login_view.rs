use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect_fixed, field_spans};

pub fn render_login_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor = Style::default().fg(app.theme.highlight).bg(bg);

    let mut email_line = vec![Span::styled(
        " Email  ",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    email_line.extend(field_spans(&app.login_input, true, bright, cursor));

    let mut lines = vec![
        Line::from(Span::styled(" Enter your email to get started.", text_style)),
        Line::from(""),
        Line::from(email_line),
        Line::from(""),
    ];
    if let Some(err) = &app.login_error {
        lines.push(Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    }

    let box_area = centered_rect_fixed(48, 8, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
