pub mod history;
pub mod navigator;

pub use history::{History, HistoryEntry, MemoryHistory, PopEvent};
pub use navigator::{NavMethod, Navigator};
