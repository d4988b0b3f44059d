use crate::model::tag::{FALLBACK_TAG_ID, Tag};
use crate::model::task::{Draft, Task};

use super::order::parse_due_date;
use super::tag_ops::resolve_tag;

/// Error type for task operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("title is required")]
    EmptyTitle,
    #[error("invalid due date \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDueDate(String),
    #[error("no task is being edited")]
    NotEditing,
}

/// Validated fields ready to be written into a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub tag_id: String,
    pub due_date: Option<String>,
}

/// Validate the editor draft.
///
/// The title must have visible characters. A blank due date means none. A
/// missing tag selection falls back to the first tag, then to the fallback id.
pub fn fields_from_draft(draft: &Draft, tags: &[Tag]) -> Result<TaskFields, TaskError> {
    if draft.title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }

    let due_date = match draft.due_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => {
            let date = parse_due_date(text).ok_or_else(|| TaskError::InvalidDueDate(text.into()))?;
            Some(date.format("%Y-%m-%d").to_string())
        }
    };

    let tag_id = draft
        .tag_id
        .as_deref()
        .filter(|id| resolve_tag(tags, id).is_some())
        .or_else(|| tags.first().map(|t| t.id.as_str()))
        .unwrap_or(FALLBACK_TAG_ID)
        .to_string();

    Ok(TaskFields {
        title: draft.title.clone(),
        description: draft.description.clone(),
        tag_id,
        due_date,
    })
}

pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id == id)
}

pub fn find_task_mut<'a>(tasks: &'a mut [Task], id: &str) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| t.id == id)
}

/// Insert a new open task at the front of the collection
pub fn create_task(tasks: &mut Vec<Task>, id: String, fields: TaskFields) -> &Task {
    let task = Task {
        id,
        title: fields.title,
        description: fields.description,
        tag_id: fields.tag_id,
        completed: false,
        due_date: fields.due_date,
    };
    tasks.insert(0, task);
    &tasks[0]
}

/// Overwrite a task's editable fields in place (completion is kept)
pub fn update_task(tasks: &mut [Task], id: &str, fields: TaskFields) -> Result<(), TaskError> {
    let task = find_task_mut(tasks, id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
    task.title = fields.title;
    task.description = fields.description;
    task.tag_id = fields.tag_id;
    task.due_date = fields.due_date;
    Ok(())
}

/// Flip completion. Returns the new state.
pub fn toggle_task(tasks: &mut [Task], id: &str) -> Result<bool, TaskError> {
    let task = find_task_mut(tasks, id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
    task.completed = !task.completed;
    Ok(task.completed)
}

/// Remove a task by id, returning it
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> Result<Task, TaskError> {
    let idx = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
    Ok(tasks.remove(idx))
}
