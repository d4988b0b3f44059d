use std::time::Duration;

use mytask::controller::Controller;
use mytask::io::records::{IDENTITY_KEY, TAGS_KEY, TASKS_KEY};
use mytask::io::storage::{KeyValueStore, MemoryStore};
use mytask::model::{Draft, FALLBACK_TAG_ID, Screen, Tag, Task};
use mytask::nav::{History, HistoryEntry, MemoryHistory, PopEvent};
use mytask::ops::tag_ops::TagError;
use pretty_assertions::assert_eq;

/// History that logs every call on top of the in-memory stack
#[derive(Default)]
struct RecordingHistory {
    inner: MemoryHistory,
    ops: Vec<String>,
}

impl History for RecordingHistory {
    fn push(&mut self, entry: HistoryEntry) {
        self.ops.push(format!("push {:?}", entry.screen));
        self.inner.push(entry);
    }

    fn replace(&mut self, entry: HistoryEntry) {
        self.ops.push(format!("replace {:?}", entry.screen));
        self.inner.replace(entry);
    }

    fn back(&mut self) -> bool {
        self.ops.push("back".into());
        self.inner.back()
    }

    fn take_pop_events(&mut self) -> Vec<PopEvent> {
        self.inner.take_pop_events()
    }
}

fn draft(title: &str) -> Draft {
    Draft {
        title: title.into(),
        ..Default::default()
    }
}

#[test]
fn sign_in_flow_only_replaces_history() {
    let mut ctl = Controller::load(
        MemoryStore::new(),
        RecordingHistory::default(),
        Duration::from_millis(2500),
    );
    assert_eq!(ctl.screen(), Screen::Login);
    let startup_ops = ctl.navigator().history().ops.len();

    ctl.login("user@yopmail.com").unwrap();
    assert_eq!(ctl.screen(), Screen::Welcome);
    let deadline = ctl.welcome_deadline().unwrap();
    ctl.tick(deadline);
    assert_eq!(ctl.screen(), Screen::Home);

    let history = ctl.navigator().history();
    assert_eq!(
        history.ops[startup_ops..].to_vec(),
        vec![
            "replace Some(Welcome)".to_string(),
            "replace Some(Home)".to_string()
        ]
    );
    assert_eq!(history.inner.depth(), 1);
}

#[test]
fn tag_cascade_through_the_editor() {
    let store = MemoryStore::new().with(IDENTITY_KEY, "user@yopmail.com");
    let mut ctl = Controller::load(store, MemoryHistory::new(), Duration::ZERO);

    // Home -> EditNote -> EditTag -> EditNote -> Home
    ctl.new_note();
    ctl.open_tag_editor(draft("Run 5k"));
    let sport = ctl.save_tag("Sport", "#14B8A6").unwrap();
    ctl.process_history();
    assert_eq!(ctl.screen(), Screen::EditNote);
    ctl.save_note(ctl.draft().clone()).unwrap();
    ctl.process_history();
    assert_eq!(ctl.screen(), Screen::Home);
    assert_eq!(ctl.tasks()[0].tag_id, sport.id);
    assert_eq!(ctl.navigator().history().depth(), 1);

    // Protected tags stay put
    assert_eq!(
        ctl.delete_tag("2"),
        Err(TagError::Protected("2".into()))
    );
    assert_eq!(ctl.tags().len(), 6);

    assert_eq!(ctl.delete_tag(&sport.id), Ok(1));
    assert_eq!(ctl.tasks()[0].tag_id, FALLBACK_TAG_ID);

    // Both collections were written through
    let tags: Vec<Tag> =
        serde_json::from_str(&ctl.store().get(TAGS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(tags.len(), 5);
    let tasks: Vec<Task> =
        serde_json::from_str(&ctl.store().get(TASKS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(tasks[0].tag_id, FALLBACK_TAG_ID);
}

#[test]
fn home_list_orders_and_filters() {
    let tasks = vec![
        Task::new("1", "Laundry", "1"),
        Task::new("2", "Exam prep", "2").with_due_date("2025-06-02"),
        Task::new("3", "Taxes", "3").with_completed(true),
        Task::new("4", "Homework", "2").with_due_date("2025-06-01"),
    ];
    let store = MemoryStore::new()
        .with(IDENTITY_KEY, "user@yopmail.com")
        .with(TASKS_KEY, &serde_json::to_string(&tasks).unwrap());
    let ctl = Controller::load(store, MemoryHistory::new(), Duration::ZERO);

    let order: Vec<&str> = ctl.visible_tasks("").iter().map(|t| t.id.as_str()).collect();
    assert_eq!(order, vec!["4", "2", "1", "3"]);

    let ecole: Vec<&str> = ctl
        .visible_tasks("ECOLE")
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ecole, vec!["4", "2"]);
    assert_eq!(ctl.progress(), (1, 4));
}

#[test]
fn logout_forgets_identity_but_keeps_tasks() {
    let store = MemoryStore::new().with(IDENTITY_KEY, "user@yopmail.com");
    let mut ctl = Controller::load(store, MemoryHistory::new(), Duration::ZERO);
    ctl.new_note();
    ctl.save_note(draft("Stay")).unwrap();
    ctl.process_history();
    ctl.logout();

    assert_eq!(ctl.screen(), Screen::Login);
    assert_eq!(ctl.store().get(IDENTITY_KEY).unwrap(), None);
    assert!(ctl.store().get(TASKS_KEY).unwrap().unwrap().contains("Stay"));
}
