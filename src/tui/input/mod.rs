mod confirm;
mod home;
mod login;
mod note;
mod tag;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Screen;

use super::app::App;

use confirm::{handle_confirm, handle_notice};
use home::handle_home;
use login::handle_login;
use note::handle_note;
use tag::handle_tag;

/// Handle a key event on the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Overlays intercept all input
    if app.notice.is_some() {
        handle_notice(app, key);
    } else if app.confirm.is_some() {
        handle_confirm(app, key);
    } else if key.modifiers.contains(KeyModifiers::ALT) && key.code == KeyCode::Left {
        app.ctl.go_back();
    } else {
        match app.ctl.screen() {
            Screen::Login => handle_login(app, key),
            Screen::Welcome => handle_welcome(app, key),
            Screen::Home => handle_home(app, key),
            Screen::EditNote => handle_note(app, key),
            Screen::EditTag => handle_tag(app, key),
        }
    }

    app.settle();
}

/// The welcome screen only waits for its timer
fn handle_welcome(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
    }
}
