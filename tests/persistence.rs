use std::fs;
use std::time::Duration;

use mytask::controller::Controller;
use mytask::io::records;
use mytask::io::storage::FileStore;
use mytask::model::{Draft, Screen, Task, default_tags};
use mytask::nav::MemoryHistory;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn state_survives_a_restart() {
    let tmp = TempDir::new().unwrap();

    {
        let store = FileStore::open(tmp.path()).unwrap();
        let mut ctl = Controller::load(store, MemoryHistory::new(), Duration::ZERO);
        assert_eq!(ctl.screen(), Screen::Login);
        ctl.login("user@yopmail.com").unwrap();
        let deadline = ctl.welcome_deadline().unwrap();
        ctl.tick(deadline);

        ctl.new_note();
        ctl.open_tag_editor(Draft {
            title: "Groceries".into(),
            due_date: Some("2025-04-01".into()),
            ..Default::default()
        });
        ctl.save_tag("Courses", "#F97316").unwrap();
        ctl.process_history();
        ctl.save_note(ctl.draft().clone()).unwrap();
        ctl.process_history();
    }

    let store = FileStore::open(tmp.path()).unwrap();
    let ctl = Controller::load(store, MemoryHistory::new(), Duration::ZERO);
    assert_eq!(ctl.screen(), Screen::Home);
    assert_eq!(ctl.identity(), Some("user@yopmail.com"));
    assert_eq!(ctl.tags().len(), 6);
    let task = &ctl.tasks()[0];
    assert_eq!(task.title, "Groceries");
    assert_eq!(task.due_date.as_deref(), Some("2025-04-01"));
    assert_eq!(ctl.tag(&task.tag_id).map(|t| t.label.as_str()), Some("Courses"));
}

#[test]
fn records_are_plain_json_files() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::open(tmp.path()).unwrap();
    let tasks = vec![
        Task::new("1", "A", "1").with_due_date("2025-01-01"),
        Task::new("2", "B", "2").with_completed(true),
    ];
    records::save_tasks(&mut store, &tasks).unwrap();
    records::save_tags(&mut store, &default_tags()).unwrap();

    let raw = fs::read_to_string(tmp.path().join("mytask_tasks.json")).unwrap();
    assert!(raw.contains("\"tagId\":\"1\""));
    assert!(raw.contains("\"dueDate\":\"2025-01-01\""));

    assert_eq!(records::load_tasks(&store), tasks);
    assert_eq!(records::load_tags(&store), default_tags());
}

#[test]
fn corrupt_records_fall_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("mytask_tags.json"), "{not json").unwrap();
    fs::write(tmp.path().join("mytask_tasks.json"), "[{\"id\":1}]").unwrap();
    fs::write(tmp.path().join("mytask_email.json"), "").unwrap();

    let store = FileStore::open(tmp.path()).unwrap();
    let ctl = Controller::load(store, MemoryHistory::new(), Duration::ZERO);
    assert_eq!(ctl.screen(), Screen::Login);
    assert_eq!(ctl.tags(), default_tags().as_slice());
    assert!(ctl.tasks().is_empty());
}
