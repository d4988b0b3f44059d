use serde::{Deserialize, Serialize};

/// The screens of the application. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    /// Email entry
    Login,
    /// Greeting shown briefly after signing in
    Welcome,
    /// Task list with search
    Home,
    /// Create or edit a task
    EditNote,
    /// Create a tag
    EditTag,
}

impl Screen {
    /// Screen shown at startup (and when history carries no payload)
    pub fn startup(signed_in: bool) -> Screen {
        if signed_in { Screen::Home } else { Screen::Login }
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Welcome => "welcome",
            Screen::Home => "home",
            Screen::EditNote => "edit-note",
            Screen::EditTag => "edit-tag",
        }
    }
}
