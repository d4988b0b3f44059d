use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::model::is_default_tag;
use crate::ops::task_ops::TaskError;
use crate::tui::app::{App, ConfirmAction, NoteField};

pub(super) fn handle_note(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.ctl.cancel_note(),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => save(app),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => {
            if app.ctl.is_editing() {
                app.ask("Delete this note?", ConfirmAction::DeleteNote);
            }
        }
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => open_tag_editor(app),
        (_, KeyCode::Tab) => app.note.focus = app.note.focus.next(),
        (_, KeyCode::BackTab) => app.note.focus = app.note.focus.prev(),
        _ if app.note.focus == NoteField::Tags => handle_tag_chips(app, key),
        (m, KeyCode::Enter)
            if app.note.focus == NoteField::Description
                && m.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            app.note.description.insert('\n')
        }
        (_, KeyCode::Enter) => app.note.focus = app.note.focus.next(),
        _ => {
            if let Some(field) = app.note.focused_field() {
                field.handle_key(key);
            }
        }
    }
}

fn handle_tag_chips(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => cycle_tag(app, -1),
        KeyCode::Right | KeyCode::Char('l') => cycle_tag(app, 1),
        KeyCode::Char('+') => open_tag_editor(app),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => ask_delete_tag(app),
        KeyCode::Enter => save(app),
        _ => {}
    }
}

fn save(app: &mut App) {
    match app.ctl.save_note(app.note.to_draft()) {
        Ok(()) => {}
        // The save hint is already dimmed for a blank title
        Err(TaskError::EmptyTitle) => debug!("save ignored: empty title"),
        Err(e) => app.notify(e.to_string()),
    }
}

fn open_tag_editor(app: &mut App) {
    let draft = app.note.to_draft();
    app.ctl.open_tag_editor(draft);
}

/// Move the chip highlight. With nothing highlighted, Right starts at the
/// first tag and Left at the last.
fn cycle_tag(app: &mut App, delta: isize) {
    let tags = app.ctl.tags();
    if tags.is_empty() {
        return;
    }
    let current = app
        .note
        .tag_id
        .as_deref()
        .and_then(|id| tags.iter().position(|t| t.id == id));
    let len = tags.len() as isize;
    let next = match current {
        Some(i) => (i as isize + delta).rem_euclid(len),
        None if delta > 0 => 0,
        None => len - 1,
    };
    app.note.tag_id = Some(tags[next as usize].id.clone());
}

fn ask_delete_tag(app: &mut App) {
    let Some(tag) = app.note.tag_id.as_deref().and_then(|id| app.ctl.tag(id)) else {
        return;
    };
    if is_default_tag(&tag.id) {
        app.notify("Default tags cannot be deleted");
        return;
    }
    let prompt = format!(
        "Delete tag \"{}\"? Its notes move to the first tag.",
        tag.label
    );
    let tag_id = tag.id.clone();
    app.ask(prompt, ConfirmAction::DeleteTag { tag_id });
}
