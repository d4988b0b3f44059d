//! The application controller: sole owner of the tags, tasks, identity and
//! editor draft. Screens read through the accessors and change state only
//! through the named operations below. Every mutation is written through
//! to storage immediately.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::io::records::{self, RecordError};
use crate::io::storage::KeyValueStore;
use crate::model::screen::Screen;
use crate::model::tag::{FALLBACK_TAG_ID, Tag};
use crate::model::task::{Draft, Task};
use crate::nav::{History, NavMethod, Navigator};
use crate::ops::identity::{IdentityError, validate_email};
use crate::ops::ids::{next_id, now_millis};
use crate::ops::order;
use crate::ops::tag_ops::{self, TagError};
use crate::ops::task_ops::{self, TaskError};

pub struct Controller<S: KeyValueStore, H: History> {
    store: S,
    nav: Navigator<H>,
    identity: Option<String>,
    tags: Vec<Tag>,
    tasks: Vec<Task>,
    draft: Draft,
    /// Task being edited in the note editor (None = creating)
    editing: Option<String>,
    welcome_delay: Duration,
    /// When the welcome screen advances to Home
    welcome_deadline: Option<Instant>,
}

impl<S: KeyValueStore, H: History> Controller<S, H> {
    /// Load persisted state and start navigation
    pub fn load(store: S, history: H, welcome_delay: Duration) -> Self {
        let identity = records::load_identity(&store);
        let tags = records::load_tags(&store);
        let tasks = records::load_tasks(&store);
        info!(
            signed_in = identity.is_some(),
            tags = tags.len(),
            tasks = tasks.len(),
            "loaded state"
        );
        let nav = Navigator::start(history, identity.is_some());
        Controller {
            store,
            nav,
            identity,
            tags,
            tasks,
            draft: Draft::default(),
            editing: None,
            welcome_delay,
            welcome_deadline: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        tag_ops::resolve_tag(&self.tags, id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The task open in the note editor, if editing an existing one
    pub fn editing_task(&self) -> Option<&Task> {
        self.editing
            .as_deref()
            .and_then(|id| task_ops::find_task(&self.tasks, id))
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Home list for a search query, in display order
    pub fn visible_tasks(&self, query: &str) -> Vec<&Task> {
        order::visible_tasks(&self.tasks, &self.tags, query)
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        order::progress(&self.tasks)
    }

    pub fn welcome_deadline(&self) -> Option<Instant> {
        self.welcome_deadline
    }

    pub fn navigator(&self) -> &Navigator<H> {
        &self.nav
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Navigation plumbing
    // -----------------------------------------------------------------------

    fn go(&mut self, to: Screen, method: NavMethod) {
        self.nav.navigate(to, method);
        if to != Screen::Welcome {
            self.welcome_deadline = None;
        }
    }

    /// Apply pending back notifications from the history. Returns true if
    /// any were applied.
    pub fn process_history(&mut self) -> bool {
        let applied = self.nav.process_pops(self.identity.is_some());
        let screen = self.nav.current();
        if screen != Screen::Welcome {
            self.welcome_deadline = None;
        }
        // Outside the editors there is no draft to keep
        if applied > 0 && matches!(screen, Screen::Home | Screen::Login) {
            self.draft = Draft::default();
            self.editing = None;
        }
        applied > 0
    }

    /// Generic back navigation, as a platform back button would do it
    pub fn go_back(&mut self) -> bool {
        self.nav.back()
    }

    /// Advance the welcome timer. Returns true if it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.welcome_deadline {
            Some(deadline) if now >= deadline => {
                self.welcome_deadline = None;
                if self.nav.current() == Screen::Welcome {
                    self.go(Screen::Home, NavMethod::Replace);
                }
                true
            }
            _ => false,
        }
    }

    // -----------------------------------------------------------------------
    // Identity
    // -----------------------------------------------------------------------

    /// Sign in with an email. On success shows the welcome screen, which
    /// advances to Home once the delay elapses.
    pub fn login(&mut self, email: &str) -> Result<(), IdentityError> {
        let email = validate_email(email)?;
        self.identity = Some(email.to_string());
        log_write(records::save_identity(&mut self.store, email));
        info!(email, "signed in");
        self.go(Screen::Welcome, NavMethod::Replace);
        self.welcome_deadline = Some(Instant::now() + self.welcome_delay);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.identity = None;
        log_write(records::clear_identity(&mut self.store));
        self.draft = Draft::default();
        self.editing = None;
        info!("signed out");
        self.go(Screen::Login, NavMethod::Replace);
    }

    // -----------------------------------------------------------------------
    // Note editor workflow
    // -----------------------------------------------------------------------

    /// Open the editor on a blank note
    pub fn new_note(&mut self) {
        self.editing = None;
        self.draft = Draft::default();
        self.go(Screen::EditNote, NavMethod::Push);
    }

    /// Open the editor on an existing task
    pub fn edit_task(&mut self, id: &str) -> Result<(), TaskError> {
        let task = task_ops::find_task(&self.tasks, id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        self.draft = Draft::from_task(task);
        self.editing = Some(id.to_string());
        self.go(Screen::EditNote, NavMethod::Push);
        Ok(())
    }

    /// Create or update the task from the editor fields, then go back.
    /// Nothing changes if the fields are invalid.
    pub fn save_note(&mut self, draft: Draft) -> Result<(), TaskError> {
        let fields = task_ops::fields_from_draft(&draft, &self.tags)?;
        match self.editing.clone() {
            Some(id) => {
                task_ops::update_task(&mut self.tasks, &id, fields)?;
                info!(%id, "updated task");
            }
            None => {
                let id = next_id(self.tasks.iter().map(|t| t.id.as_str()), now_millis());
                let task = task_ops::create_task(&mut self.tasks, id, fields);
                info!(id = %task.id, "created task");
            }
        }
        self.persist_tasks();
        self.close_note();
        Ok(())
    }

    /// Delete the task open in the editor, then go back
    pub fn delete_note(&mut self) -> Result<Task, TaskError> {
        let id = self.editing.clone().ok_or(TaskError::NotEditing)?;
        let removed = task_ops::delete_task(&mut self.tasks, &id)?;
        info!(%id, "deleted task");
        self.persist_tasks();
        self.close_note();
        Ok(removed)
    }

    /// Leave the editor without saving
    pub fn cancel_note(&mut self) {
        self.close_note();
    }

    fn close_note(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
        self.nav.back();
    }

    // -----------------------------------------------------------------------
    // Tag editor workflow
    // -----------------------------------------------------------------------

    /// Stash the editor fields and open the tag editor
    pub fn open_tag_editor(&mut self, draft: Draft) {
        self.draft = draft;
        self.go(Screen::EditTag, NavMethod::Push);
    }

    /// Create a tag, select it in the draft and go back to the note editor
    pub fn save_tag(&mut self, label: &str, color: &str) -> Result<Tag, TagError> {
        let id = next_id(self.tags.iter().map(|t| t.id.as_str()), now_millis());
        let tag = tag_ops::create_tag(&mut self.tags, id, label, color)?;
        info!(id = %tag.id, label = %tag.label, "created tag");
        self.persist_tags();
        self.draft.tag_id = Some(tag.id.clone());
        self.nav.back();
        Ok(tag)
    }

    pub fn cancel_tag(&mut self) {
        self.nav.back();
    }

    /// Delete a tag, moving its tasks to the fallback tag. Returns how many
    /// tasks moved.
    pub fn delete_tag(&mut self, id: &str) -> Result<usize, TagError> {
        let moved = tag_ops::delete_tag(&mut self.tags, &mut self.tasks, id)?;
        info!(id, reassigned = moved, "deleted tag");
        self.persist_tags();
        self.persist_tasks();
        if self.draft.tag_id.as_deref() == Some(id) {
            self.draft.tag_id = Some(self.first_tag_id());
        }
        Ok(moved)
    }

    /// Id of the first tag, or the fallback id if there are none
    pub fn first_tag_id(&self) -> String {
        self.tags
            .first()
            .map(|t| t.id.clone())
            .unwrap_or_else(|| FALLBACK_TAG_ID.to_string())
    }

    // -----------------------------------------------------------------------
    // Home list actions
    // -----------------------------------------------------------------------

    pub fn toggle_task(&mut self, id: &str) -> Result<bool, TaskError> {
        let completed = task_ops::toggle_task(&mut self.tasks, id)?;
        info!(id, completed, "toggled task");
        self.persist_tasks();
        Ok(completed)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task, TaskError> {
        let removed = task_ops::delete_task(&mut self.tasks, id)?;
        info!(id, "deleted task");
        self.persist_tasks();
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    fn persist_tasks(&mut self) {
        log_write(records::save_tasks(&mut self.store, &self.tasks));
    }

    fn persist_tags(&mut self) {
        log_write(records::save_tags(&mut self.store, &self.tags));
    }
}

/// Storage writes are fire-and-forget; failures are only logged
fn log_write(result: Result<(), RecordError>) {
    if let Err(e) = result {
        warn!(error = %e, "could not persist state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::records::{IDENTITY_KEY, TAGS_KEY, TASKS_KEY};
    use crate::io::storage::MemoryStore;
    use crate::model::tag::default_tags;
    use crate::nav::MemoryHistory;
    use pretty_assertions::assert_eq;

    type TestController = Controller<MemoryStore, MemoryHistory>;

    fn signed_in() -> TestController {
        let store = MemoryStore::new().with(IDENTITY_KEY, "user@yopmail.com");
        Controller::load(store, MemoryHistory::new(), Duration::from_millis(2500))
    }

    fn draft(title: &str) -> Draft {
        Draft {
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn startup_screen_follows_identity() {
        let c: TestController =
            Controller::load(MemoryStore::new(), MemoryHistory::new(), Duration::ZERO);
        assert_eq!(c.screen(), Screen::Login);
        assert_eq!(c.tags(), default_tags().as_slice());
        assert_eq!(signed_in().screen(), Screen::Home);
    }

    #[test]
    fn login_rejects_bad_email() {
        let mut c: TestController =
            Controller::load(MemoryStore::new(), MemoryHistory::new(), Duration::ZERO);
        assert_eq!(c.login("nope"), Err(IdentityError::InvalidEmail));
        assert_eq!(c.screen(), Screen::Login);
        assert_eq!(c.identity(), None);
        assert!(c.welcome_deadline().is_none());
    }

    #[test]
    fn welcome_advances_after_delay() {
        let mut c: TestController = Controller::load(
            MemoryStore::new(),
            MemoryHistory::new(),
            Duration::from_millis(2500),
        );
        c.login("user@yopmail.com").unwrap();
        assert_eq!(c.screen(), Screen::Welcome);
        assert_eq!(
            c.store().get(IDENTITY_KEY).unwrap().as_deref(),
            Some("user@yopmail.com")
        );

        let deadline = c.welcome_deadline().unwrap();
        assert!(!c.tick(deadline - Duration::from_millis(1)));
        assert_eq!(c.screen(), Screen::Welcome);
        assert!(c.tick(deadline));
        assert_eq!(c.screen(), Screen::Home);
        assert_eq!(c.navigator().history().depth(), 1);
        // Timer fires once
        assert!(!c.tick(deadline + Duration::from_secs(10)));
    }

    #[test]
    fn leaving_welcome_cancels_timer() {
        let mut c: TestController =
            Controller::load(MemoryStore::new(), MemoryHistory::new(), Duration::from_secs(5));
        c.login("user@yopmail.com").unwrap();
        let deadline = c.welcome_deadline().unwrap();
        c.logout();
        assert!(c.welcome_deadline().is_none());
        assert!(!c.tick(deadline));
        assert_eq!(c.screen(), Screen::Login);
    }

    #[test]
    fn create_note_round_trip() {
        let mut c = signed_in();
        c.new_note();
        assert_eq!(c.screen(), Screen::EditNote);
        assert!(!c.is_editing());

        assert_eq!(c.save_note(draft("  ")), Err(TaskError::EmptyTitle));
        assert_eq!(c.screen(), Screen::EditNote);
        assert!(c.tasks().is_empty());

        c.save_note(draft("Buy milk")).unwrap();
        assert!(c.process_history());
        assert_eq!(c.screen(), Screen::Home);
        assert_eq!(c.tasks().len(), 1);
        assert_eq!(c.tasks()[0].tag_id, "1");
        assert_eq!(c.draft(), &Draft::default());

        let stored = c.store().get(TASKS_KEY).unwrap().unwrap();
        assert!(stored.contains("Buy milk"));
    }

    #[test]
    fn edit_existing_task() {
        let mut c = signed_in();
        c.new_note();
        c.save_note(draft("Old title")).unwrap();
        c.process_history();
        let id = c.tasks()[0].id.clone();
        c.toggle_task(&id).unwrap();

        c.edit_task(&id).unwrap();
        assert_eq!(c.draft().title, "Old title");
        assert_eq!(c.editing_task().map(|t| t.id.as_str()), Some(id.as_str()));

        let mut d = c.draft().clone();
        d.title = "New title".into();
        d.due_date = Some("2025-02-01".into());
        c.save_note(d).unwrap();
        c.process_history();

        assert_eq!(c.tasks().len(), 1);
        assert_eq!(c.tasks()[0].title, "New title");
        assert!(c.tasks()[0].completed);
        assert!(!c.is_editing());
    }

    #[test]
    fn edit_unknown_task_stays_home() {
        let mut c = signed_in();
        assert_eq!(c.edit_task("404"), Err(TaskError::NotFound("404".into())));
        assert_eq!(c.screen(), Screen::Home);
    }

    #[test]
    fn tag_detour_keeps_draft_and_selects_new_tag() {
        let mut c = signed_in();
        c.new_note();
        let mut d = draft("Half typed");
        d.description = "details".into();
        c.open_tag_editor(d);
        assert_eq!(c.screen(), Screen::EditTag);

        let tag = c.save_tag(" Sport ", "#14B8A6").unwrap();
        c.process_history();
        assert_eq!(c.screen(), Screen::EditNote);
        assert_eq!(c.draft().title, "Half typed");
        assert_eq!(c.draft().description, "details");
        assert_eq!(c.draft().tag_id.as_deref(), Some(tag.id.as_str()));
        assert_eq!(c.tags().len(), 6);
    }

    #[test]
    fn duplicate_tag_stays_on_tag_screen() {
        let mut c = signed_in();
        c.new_note();
        c.open_tag_editor(draft("x"));
        assert_eq!(
            c.save_tag("  boulot ", "#14B8A6"),
            Err(TagError::DuplicateLabel("boulot".into()))
        );
        assert!(!c.process_history());
        assert_eq!(c.screen(), Screen::EditTag);
        assert_eq!(c.tags().len(), 5);
    }

    #[test]
    fn delete_tag_reassigns_tasks_and_draft() {
        let mut c = signed_in();
        c.new_note();
        c.open_tag_editor(draft("x"));
        let tag = c.save_tag("Sport", "#14B8A6").unwrap();
        c.process_history();
        let mut d = c.draft().clone();
        d.title = "Run".into();
        c.save_note(d).unwrap();
        c.process_history();
        assert_eq!(c.tasks()[0].tag_id, tag.id);

        c.new_note();
        c.open_tag_editor(Draft {
            tag_id: Some(tag.id.clone()),
            ..Default::default()
        });
        c.cancel_tag();
        c.process_history();
        assert_eq!(c.delete_tag(&tag.id), Ok(1));
        assert_eq!(c.tasks()[0].tag_id, FALLBACK_TAG_ID);
        assert_eq!(c.draft().tag_id.as_deref(), Some("1"));
        assert!(c.tag(&tag.id).is_none());
    }

    #[test]
    fn delete_note_requires_edit_target() {
        let mut c = signed_in();
        c.new_note();
        assert_eq!(c.delete_note(), Err(TaskError::NotEditing));
        c.save_note(draft("Doomed")).unwrap();
        c.process_history();
        let id = c.tasks()[0].id.clone();
        c.edit_task(&id).unwrap();
        let removed = c.delete_note().unwrap();
        assert_eq!(removed.title, "Doomed");
        c.process_history();
        assert_eq!(c.screen(), Screen::Home);
        assert!(c.tasks().is_empty());
    }

    #[test]
    fn logout_clears_identity() {
        let mut c = signed_in();
        c.logout();
        assert_eq!(c.screen(), Screen::Login);
        assert_eq!(c.identity(), None);
        assert_eq!(c.store().get(IDENTITY_KEY).unwrap(), None);
        assert_eq!(c.navigator().history().depth(), 1);
    }

    #[test]
    fn platform_back_restores_payload_screen() {
        let mut c = signed_in();
        assert!(!c.go_back());

        let mut d = draft("Half typed");
        d.tag_id = Some("2".into());
        c.new_note();
        c.open_tag_editor(d.clone());
        assert!(c.go_back());
        c.process_history();
        assert_eq!(c.screen(), Screen::EditNote);
        assert_eq!(c.draft(), &d);

        assert!(c.go_back());
        c.process_history();
        assert_eq!(c.screen(), Screen::Home);
        assert_eq!(c.draft(), &Draft::default());
        assert!(!c.is_editing());
    }

    #[test]
    fn new_ids_are_unique() {
        let mut c = signed_in();
        for title in ["a", "b", "c"] {
            c.new_note();
            c.save_note(draft(title)).unwrap();
            c.process_history();
        }
        let mut ids: Vec<&str> = c.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        // Newest first
        assert_eq!(c.tasks()[0].title, "c");
    }

    #[test]
    fn saving_after_loading_the_largest_id_still_works() {
        let tasks = vec![Task::new("9223372036854775807", "Old", "1")];
        let store = MemoryStore::new()
            .with(IDENTITY_KEY, "user@yopmail.com")
            .with(TASKS_KEY, &serde_json::to_string(&tasks).unwrap());
        let mut c: TestController =
            Controller::load(store, MemoryHistory::new(), Duration::ZERO);
        c.new_note();
        c.save_note(draft("New")).unwrap();
        assert_eq!(c.tasks()[0].title, "New");
        assert_eq!(c.tasks()[0].id, "9223372036854775808");
    }

    #[test]
    fn cascade_resolves_when_stored_tags_lack_the_fallback() {
        let tasks = vec![Task::new("x", "Run", "t9")];
        let store = MemoryStore::new()
            .with(IDENTITY_KEY, "user@yopmail.com")
            .with(
                TAGS_KEY,
                r##"[{"id":"2","label":"Ecole","color":"#FF5E78"},{"id":"t9","label":"Sport","color":"#14B8A6"}]"##,
            )
            .with(TASKS_KEY, &serde_json::to_string(&tasks).unwrap());
        let mut c: TestController =
            Controller::load(store, MemoryHistory::new(), Duration::ZERO);
        assert_eq!(c.delete_tag("t9"), Ok(1));
        for task in c.tasks() {
            assert!(c.tag(&task.tag_id).is_some(), "{} has a dangling tag", task.title);
        }
    }
}
