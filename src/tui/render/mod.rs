pub mod header;
pub mod helpers;
pub mod home_view;
pub mod login_view;
pub mod note_view;
pub mod popup;
pub mod status_row;
pub mod tag_view;
pub mod welcome_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::Screen;

use super::app::App;

/// Main render function, dispatching to the current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    match app.ctl.screen() {
        Screen::Login => login_view::render_login_view(frame, app, chunks[1]),
        Screen::Welcome => welcome_view::render_welcome_view(frame, app, chunks[1]),
        Screen::Home => home_view::render_home_view(frame, app, chunks[1]),
        Screen::EditNote => note_view::render_note_view(frame, app, chunks[1]),
        Screen::EditTag => tag_view::render_tag_view(frame, app, chunks[1]),
    }

    // Overlays on top of everything
    if app.confirm.is_some() {
        popup::render_confirm_popup(frame, app, area);
    }
    if app.notice.is_some() {
        popup::render_notice_popup(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
