use tracing::{debug, info};

use crate::model::screen::Screen;

use super::history::{History, HistoryEntry, PopEvent};

/// How a transition is recorded on the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMethod {
    /// New entry; back returns to the current screen
    Push,
    /// Overwrite the top entry; the current screen is not revisitable
    Replace,
}

/// Tracks the current screen and mirrors every transition onto a history
/// stack, so back navigation is resolved from the entry payloads.
#[derive(Debug)]
pub struct Navigator<H: History> {
    history: H,
    current: Screen,
}

impl<H: History> Navigator<H> {
    /// Start on Home when signed in, otherwise Login. The initial history
    /// entry is replaced so it carries the startup screen.
    pub fn start(mut history: H, signed_in: bool) -> Self {
        let current = Screen::startup(signed_in);
        history.replace(HistoryEntry::new(current));
        info!(screen = current.name(), "navigation started");
        Navigator { history, current }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate(&mut self, to: Screen, method: NavMethod) {
        let entry = HistoryEntry::new(to);
        match method {
            NavMethod::Push => self.history.push(entry),
            NavMethod::Replace => self.history.replace(entry),
        }
        debug!(from = self.current.name(), to = to.name(), ?method, "navigate");
        self.current = to;
    }

    /// Ask the history to go back. The screen changes once the pop event
    /// is processed.
    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    /// Apply a back notification. A missing payload falls back to the
    /// startup rule.
    pub fn on_pop(&mut self, event: PopEvent, signed_in: bool) -> Screen {
        let to = event.screen.unwrap_or_else(|| Screen::startup(signed_in));
        debug!(from = self.current.name(), to = to.name(), "went back");
        self.current = to;
        to
    }

    /// Drain and apply all pending back notifications. Returns how many
    /// were applied.
    pub fn process_pops(&mut self, signed_in: bool) -> usize {
        let events = self.history.take_pop_events();
        let count = events.len();
        for event in events {
            self.on_pop(event, signed_in);
        }
        count
    }

    pub fn history(&self) -> &H {
        &self.history
    }
}
