use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::records::{IDENTITY_KEY, TASKS_KEY};
use crate::io::storage::MemoryStore;
use crate::model::{AppConfig, Task};
use crate::tui::app::App;
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole app at the default terminal size
pub fn render_app(app: &mut App) -> String {
    render_app_sized(app, TERM_W, TERM_H)
}

pub fn render_app_sized(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}

/// A signed-out app with nothing persisted
pub fn fresh_app() -> App {
    App::new(Box::new(MemoryStore::new()), &AppConfig::default())
}

/// A signed-in app on Home holding `tasks` and the default tags
pub fn app_with_tasks(tasks: &[Task]) -> App {
    let json = serde_json::to_string(tasks).unwrap();
    let store = MemoryStore::new()
        .with(IDENTITY_KEY, "user@yopmail.com")
        .with(TASKS_KEY, &json);
    App::new(Box::new(store), &AppConfig::default())
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, c: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
