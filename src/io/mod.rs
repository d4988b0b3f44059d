pub mod config_io;
pub mod records;
pub mod storage;
