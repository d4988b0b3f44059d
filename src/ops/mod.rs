pub mod identity;
pub mod ids;
pub mod order;
pub mod tag_ops;
pub mod task_ops;
