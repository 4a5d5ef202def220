pub mod age;
pub mod checkpoint;
pub mod config;
pub mod workspace;

pub use age::*;
pub use checkpoint::*;
pub use config::*;
pub use workspace::*;
