use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::tui::app::{App, Mode, NoteField, TagField};
use crate::util::text;

/// Key hints for the current screen
fn hints(app: &App) -> &'static str {
    if app.notice.is_some() {
        return "any key dismiss";
    }
    if app.confirm.is_some() {
        return "y confirm  n cancel";
    }
    match app.ctl.screen() {
        Screen::Login => "Enter sign in  Esc quit",
        Screen::Welcome => "q quit",
        Screen::Home => match app.mode {
            Mode::Search => "Enter keep filter  Esc clear",
            Mode::Navigate => "n new  e edit  space done  d delete  / search  L logout  q quit",
        },
        Screen::EditNote => match app.note.focus {
            NoteField::Tags => "\u{2190}\u{2192} pick  + new tag  d delete tag  Enter save  Esc back",
            NoteField::Description => "Alt-Enter newline  Tab next  Ctrl-S save  Esc back",
            _ => "Tab next  Ctrl-T new tag  Ctrl-S save  Esc back",
        },
        Screen::EditTag => match app.tag_form.focus {
            TagField::Label => "Tab color  Enter save  Esc back",
            TagField::Color => "\u{2190}\u{2192} color  Tab label  Enter save  Esc back",
        },
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if app.show_key_hints {
        let hint = text::truncate_to_width(hints(app), width.saturating_sub(1));
        let padding = width.saturating_sub(text::display_width(&hint) + 1);
        Line::from(vec![
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
            Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
        ])
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
