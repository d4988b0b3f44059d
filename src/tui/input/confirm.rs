use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::tui::app::{App, ConfirmAction};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(state) = app.confirm.take() {
                apply(app, state.action);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm = None,
        _ => {}
    }
}

/// Any key dismisses a notice
pub(super) fn handle_notice(app: &mut App, _key: KeyEvent) {
    app.notice = None;
}

fn apply(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::DeleteTask { task_id } => {
            if let Err(e) = app.ctl.delete_task(&task_id) {
                warn!(error = %e, "delete failed");
            }
            app.clamp_home_cursor();
        }
        ConfirmAction::DeleteNote => {
            if let Err(e) = app.ctl.delete_note() {
                app.notify(e.to_string());
            }
        }
        ConfirmAction::DeleteTag { tag_id } => match app.ctl.delete_tag(&tag_id) {
            Ok(_) => {
                if app.note.tag_id.as_deref() == Some(tag_id.as_str()) {
                    app.note.tag_id = Some(app.ctl.first_tag_id());
                }
            }
            Err(e) => app.notify(e.to_string()),
        },
        ConfirmAction::Logout => app.ctl.logout(),
    }
}
