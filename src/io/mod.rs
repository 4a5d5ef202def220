pub mod catalog;
pub mod clipboard;
pub mod config_io;
pub mod editor;
pub mod log;
pub mod process;
pub mod store;
