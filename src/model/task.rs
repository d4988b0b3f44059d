use serde::{Deserialize, Serialize};

/// A note/task as persisted in the task collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Creation-time id (decimal milliseconds, monotonically assigned)
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Id of the tag this task is filed under
    pub tag_id: String,
    #[serde(default)]
    pub completed: bool,
    /// Due date as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tag_id: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            tag_id: tag_id.into(),
            completed: false,
            due_date: None,
        }
    }

    /// Builder-style due date setter
    pub fn with_due_date(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style completion setter
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// In-progress fields of the note editor.
///
/// Kept by the controller while the user hops over to the tag editor and
/// back, so nothing typed is lost. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    /// Selected tag, if any
    pub tag_id: Option<String>,
    /// Raw due date text as typed (validated on save)
    pub due_date: Option<String>,
}

impl Draft {
    /// Prefill a draft from an existing task (edit workflow)
    pub fn from_task(task: &Task) -> Self {
        Draft {
            title: task.title.clone(),
            description: task.description.clone(),
            tag_id: Some(task.tag_id.clone()),
            due_date: task.due_date.clone(),
        }
    }
}
