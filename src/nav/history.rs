use std::collections::VecDeque;

use crate::model::screen::Screen;

/// An entry on the history stack. The payload names the screen the entry
/// belongs to; it can be missing if the stack was tampered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub screen: Option<Screen>,
}

impl HistoryEntry {
    pub fn new(screen: Screen) -> Self {
        HistoryEntry {
            screen: Some(screen),
        }
    }

    /// An entry with no payload
    pub fn blank() -> Self {
        HistoryEntry { screen: None }
    }
}

/// Delivered after a back navigation: the payload of the entry now on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopEvent {
    pub screen: Option<Screen>,
}

/// A navigable history stack.
///
/// `back` only requests the navigation; the resulting [`PopEvent`] is
/// picked up later through `take_pop_events`, the same way a platform
/// delivers its "went back" notification asynchronously.
pub trait History {
    fn push(&mut self, entry: HistoryEntry);
    fn replace(&mut self, entry: HistoryEntry);
    /// Go back one entry. Returns false if there is nothing to go back to.
    fn back(&mut self) -> bool;
    /// Drain pending back notifications, oldest first
    fn take_pop_events(&mut self) -> Vec<PopEvent>;
}

/// In-process history stack
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    pending: VecDeque<PopEvent>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries from bottom to top
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    fn replace(&mut self, entry: HistoryEntry) {
        match self.entries.last_mut() {
            Some(top) => *top = entry,
            None => self.entries.push(entry),
        }
    }

    fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        let screen = self.entries.last().and_then(|e| e.screen);
        self.pending.push_back(PopEvent { screen });
        true
    }

    fn take_pop_events(&mut self) -> Vec<PopEvent> {
        self.pending.drain(..).collect()
    }
}
