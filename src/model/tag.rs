use serde::{Deserialize, Serialize};

/// Id every task falls back to when its tag is deleted (the first default tag)
pub const FALLBACK_TAG_ID: &str = "1";

/// Colors offered when creating a tag. The first one is preselected.
pub const COLOR_PALETTE: [&str; 10] = [
    "#FF5E78", "#D8B4FE", "#9333EA", "#1E293B", "#F97316", "#14B8A6", "#06B6D4", "#B45309",
    "#EF4444", "#6366F1",
];

/// Built-in tags: (id, label, color). These can never be deleted.
const DEFAULT_TAGS: [(&str, &str, &str); 5] = [
    ("1", "Famille", "#CBD5E1"),
    ("2", "Ecole", "#FF5E78"),
    ("3", "Finance", "#CBD5E1"),
    ("4", "Boulot", "#94A3B8"),
    ("5", "Politique", "#CBD5E1"),
];

/// A label used to categorize tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Opaque, stable id
    pub id: String,
    /// Display label, unique ignoring case
    pub label: String,
    /// `#RRGGBB` chip color
    pub color: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Tag {
            id: id.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// The initial tag collection for a fresh profile
pub fn default_tags() -> Vec<Tag> {
    DEFAULT_TAGS
        .iter()
        .map(|(id, label, color)| Tag::new(*id, *label, *color))
        .collect()
}

/// Whether a tag id belongs to the protected default set
pub fn is_default_tag(id: &str) -> bool {
    DEFAULT_TAGS.iter().any(|(default_id, _, _)| *default_id == id)
}
