pub mod config;
pub mod screen;
pub mod tag;
pub mod task;

pub use config::*;
pub use screen::*;
pub use tag::*;
pub use task::*;
