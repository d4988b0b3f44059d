use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect_fixed, wrap_text};

/// Yes/no prompt before a destructive action
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    render_popup(
        frame,
        app,
        area,
        " Confirm",
        &confirm.prompt,
        "y yes   n no",
    );
}

/// Message overlay dismissed by any key
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = &app.notice else {
        return;
    };
    render_popup(frame, app, area, " Notice", message, "press any key");
}

fn render_popup(frame: &mut Frame, app: &App, area: Rect, title: &str, body: &str, hint: &str) {
    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let hint_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((title.to_string(), header_style));
    styled_lines.push((String::new(), text_style));
    for s in wrap_text(" ", body, inner_w) {
        styled_lines.push((s, text_style));
    }
    styled_lines.push((String::new(), text_style));
    styled_lines.push((format!(" {}", hint), hint_style));

    // Dynamic height from content + 2 for borders
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
