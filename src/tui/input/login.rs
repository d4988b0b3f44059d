use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::tui::app::App;

pub(super) fn handle_login(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let email = app.login_input.value().to_string();
            if let Err(e) = app.ctl.login(&email) {
                debug!(error = %e, "login rejected");
                app.login_error = Some(e.to_string());
                app.notify(e.to_string());
            }
        }
        KeyCode::Esc => app.should_quit = true,
        _ => {
            if app.login_input.handle_key(key) {
                app.login_error = None;
            }
        }
    }
}
