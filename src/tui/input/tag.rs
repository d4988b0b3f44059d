use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::model::COLOR_PALETTE;
use crate::ops::tag_ops::TagError;
use crate::tui::app::{App, TagField};

pub(super) fn handle_tag(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.ctl.cancel_tag(),
        KeyCode::Enter => save(app),
        KeyCode::Tab | KeyCode::BackTab => {
            app.tag_form.focus = match app.tag_form.focus {
                TagField::Label => TagField::Color,
                TagField::Color => TagField::Label,
            };
        }
        _ => match app.tag_form.focus {
            TagField::Label => {
                app.tag_form.label.handle_key(key);
            }
            TagField::Color => match key.code {
                KeyCode::Left | KeyCode::Char('h') => cycle_color(app, -1),
                KeyCode::Right | KeyCode::Char('l') => cycle_color(app, 1),
                _ => {}
            },
        },
    }
}

fn cycle_color(app: &mut App, delta: isize) {
    let len = COLOR_PALETTE.len() as isize;
    let next = (app.tag_form.color_index as isize + delta).rem_euclid(len);
    app.tag_form.color_index = next as usize;
}

fn save(app: &mut App) {
    let color = COLOR_PALETTE[app.tag_form.color_index % COLOR_PALETTE.len()];
    let label = app.tag_form.label.value().to_string();
    match app.ctl.save_tag(&label, color) {
        Ok(_) => {}
        Err(TagError::EmptyLabel) => debug!("save ignored: empty label"),
        Err(e) => app.notify(e.to_string()),
    }
}
