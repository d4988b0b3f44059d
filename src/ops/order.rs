//! Ordering and filtering of the home task list.
//!
//! Everything here is a pure function of the current collections; the list
//! is re-derived on every render.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::tag::Tag;
use crate::model::task::Task;

use super::tag_ops::resolve_tag;

/// Whether a task matches a search query (title or tag label, ignoring case).
/// An empty query matches everything.
pub fn matches_query(task: &Task, tags: &[Tag], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    if task.title.to_lowercase().contains(&needle) {
        return true;
    }
    resolve_tag(tags, &task.tag_id).is_some_and(|tag| tag.label.to_lowercase().contains(&needle))
}

/// Display order: open tasks first; among open tasks, dated before undated and
/// earlier dates first. Everything else compares equal.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    match (a.completed, b.completed) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => match (&a.due_date, &b.due_date) {
            (Some(da), Some(db)) => da.cmp(db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable sort of tasks into display order
pub fn sort_tasks(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| compare_tasks(a, b));
}

/// Filter by `query` and sort for display
pub fn visible_tasks<'a>(tasks: &'a [Task], tags: &[Tag], query: &str) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| matches_query(t, tags, query))
        .collect();
    sort_tasks(&mut visible);
    visible
}

/// Parse a `YYYY-MM-DD` due date
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// An open task whose due date is strictly before `today`
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.completed {
        return false;
    }
    task.due_date
        .as_deref()
        .and_then(parse_due_date)
        .is_some_and(|due| due < today)
}

/// (completed, total) over the whole collection
pub fn progress(tasks: &[Task]) -> (usize, usize) {
    let done = tasks.iter().filter(|t| t.completed).count();
    (done, tasks.len())
}
