use chrono::{Local, NaiveDate};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::ops::order::{is_overdue, parse_due_date};
use crate::tui::app::{App, Mode};
use crate::util::text;

use super::helpers::{CURSOR, spans_width};

/// Rows above the task list: account line and search line
const LIST_TOP: u16 = 2;

/// Due date as day + short month ("5 Mar")
pub(super) fn format_due(due: &str) -> Option<String> {
    parse_due_date(due).map(|d| d.format("%-d %b").to_string())
}

pub fn render_home_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let today = Local::now().date_naive();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(account_line(app, width));
    lines.push(search_line(app));

    let list_height = area.height.saturating_sub(LIST_TOP) as usize;
    let visible = app.visible_tasks();
    let count = visible.len();

    if count == 0 {
        let dim = Style::default().fg(app.theme.dim).bg(bg);
        lines.push(Line::from(""));
        if app.ctl.tasks().is_empty() && app.search.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Nothing here yet. Press n to write your first note.",
                Style::default().fg(app.theme.text).bg(bg),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  No note matches \"{}\"", app.search.value()),
                dim,
            )));
        }
    } else {
        // Keep the cursor on screen
        let cursor = app.home_cursor.min(count - 1);
        let mut scroll = app.home_scroll.min(count.saturating_sub(1));
        if cursor < scroll {
            scroll = cursor;
        } else if list_height > 0 && cursor >= scroll + list_height {
            scroll = cursor + 1 - list_height;
        }

        let rows: Vec<Line> = visible
            .iter()
            .enumerate()
            .skip(scroll)
            .take(list_height)
            .map(|(i, task)| task_row(app, task, i == cursor, width, today))
            .collect();
        lines.extend(rows);
        app.home_scroll = scroll;
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// "email ........ 2/5 done"
fn account_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let (done, total) = app.ctl.progress();
    let progress = format!("{}/{} done ", done, total);
    let email = app.ctl.identity().unwrap_or_default();
    let room = width.saturating_sub(text::display_width(&progress) + 2);
    let email = format!(" {}", text::truncate_to_width(email, room));
    let pad = width.saturating_sub(text::display_width(&email) + text::display_width(&progress));
    Line::from(vec![
        Span::styled(email, Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(progress, Style::default().fg(app.theme.green).bg(bg)),
    ])
}

fn search_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    match app.mode {
        Mode::Search => Line::from(vec![
            Span::styled(
                format!(" /{}", app.search.value()),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled(CURSOR, Style::default().fg(app.theme.highlight).bg(bg)),
        ]),
        Mode::Navigate if !app.search.is_empty() => Line::from(Span::styled(
            format!(" /{}", app.search.value()),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Mode::Navigate => Line::from(""),
    }
}

fn task_row(
    app: &App,
    task: &Task,
    selected: bool,
    width: usize,
    today: NaiveDate,
) -> Line<'static> {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut left = vec![
        Span::styled(
            if selected { "\u{258E}" } else { " " },
            base.fg(theme.selection_border),
        ),
        Span::styled(
            if task.completed { "[x] " } else { "[ ] " },
            base.fg(if task.completed { theme.green } else { theme.text }),
        ),
    ];

    // Right side: tag chip and due date
    let mut right: Vec<Span<'static>> = Vec::new();
    if let Some(tag) = app.ctl.tag(&task.tag_id) {
        right.push(Span::styled(
            format!(" {} ", tag.label),
            Style::default()
                .fg(theme.background)
                .bg(theme.tag_color(&tag.color)),
        ));
    }
    if let Some(due) = task.due_date.as_deref().and_then(format_due) {
        let fg = if is_overdue(task, today) {
            theme.red
        } else {
            theme.dim
        };
        right.push(Span::styled(format!(" {:>6}", due), base.fg(fg)));
    }
    right.push(Span::styled(" ", base));

    let title_room = width.saturating_sub(spans_width(&left) + spans_width(&right) + 1);
    let title = text::truncate_to_width(&task.title, title_room);
    let title_style = if task.completed {
        base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else if selected {
        base.fg(theme.text_bright)
    } else {
        base.fg(theme.text)
    };
    left.push(Span::styled(title, title_style));

    let pad = width.saturating_sub(spans_width(&left) + spans_width(&right));
    left.push(Span::styled(" ".repeat(pad), base));
    left.extend(right);
    Line::from(left)
}
