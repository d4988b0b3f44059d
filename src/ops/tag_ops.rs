use crate::model::tag::{FALLBACK_TAG_ID, Tag, is_default_tag};
use crate::model::task::Task;

/// Error type for tag operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("tag label cannot be empty")]
    EmptyLabel,
    #[error("a tag named \"{0}\" already exists")]
    DuplicateLabel(String),
    #[error("default tags cannot be deleted")]
    Protected(String),
    #[error("tag not found: {0}")]
    NotFound(String),
}

/// Look up a tag by id
pub fn resolve_tag<'a>(tags: &'a [Tag], id: &str) -> Option<&'a Tag> {
    tags.iter().find(|t| t.id == id)
}

/// Whether a label (trimmed) is already taken, ignoring case
pub fn label_exists(tags: &[Tag], label: &str) -> bool {
    let wanted = label.trim().to_lowercase();
    tags.iter().any(|t| t.label.to_lowercase() == wanted)
}

/// Append a new tag. The label is trimmed and must be unique ignoring case.
pub fn create_tag(tags: &mut Vec<Tag>, id: String, label: &str, color: &str) -> Result<Tag, TagError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(TagError::EmptyLabel);
    }
    if label_exists(tags, label) {
        return Err(TagError::DuplicateLabel(label.to_string()));
    }
    let tag = Tag::new(id, label, color);
    tags.push(tag.clone());
    Ok(tag)
}

/// Delete a non-default tag and move its tasks to the fallback tag.
/// Returns how many tasks were reassigned.
pub fn delete_tag(tags: &mut Vec<Tag>, tasks: &mut [Task], id: &str) -> Result<usize, TagError> {
    if is_default_tag(id) {
        return Err(TagError::Protected(id.to_string()));
    }
    let idx = tags
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| TagError::NotFound(id.to_string()))?;
    tags.remove(idx);

    let mut reassigned = 0;
    for task in tasks.iter_mut().filter(|t| t.tag_id == id) {
        task.tag_id = FALLBACK_TAG_ID.to_string();
        reassigned += 1;
    }
    Ok(reassigned)
}
