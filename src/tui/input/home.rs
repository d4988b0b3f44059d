use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_home(app: &mut App, key: KeyEvent) {
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Home | KeyCode::Char('g') => app.home_cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.home_cursor = app.visible_tasks().len().saturating_sub(1);
        }
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Esc => {
            app.search.clear();
            app.clamp_home_cursor();
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                if let Err(e) = app.ctl.toggle_task(&id) {
                    warn!(error = %e, "toggle failed");
                }
                // The list re-sorts; keep the cursor in range
                app.clamp_home_cursor();
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = app.cursor_task_id()
                && let Err(e) = app.ctl.edit_task(&id)
            {
                app.notify(e.to_string());
            }
        }
        KeyCode::Char('n') | KeyCode::Char('a') => app.ctl.new_note(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id() {
                let title = app
                    .ctl
                    .tasks()
                    .iter()
                    .find(|t| t.id == id)
                    .map(|t| t.title.clone())
                    .unwrap_or_default();
                app.ask(
                    format!("Delete \"{}\"?", title),
                    ConfirmAction::DeleteTask { task_id: id },
                );
            }
        }
        KeyCode::Char('L') => {
            app.ask("Log out?", ConfirmAction::Logout);
        }
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => app.mode = Mode::Navigate,
        _ => {
            if app.search.handle_key(key) {
                app.home_cursor = 0;
                app.home_scroll = 0;
            }
        }
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.visible_tasks().len();
    if count == 0 {
        return;
    }
    app.home_cursor = app
        .home_cursor
        .saturating_add_signed(delta)
        .min(count - 1);
}
