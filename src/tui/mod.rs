pub mod app;
pub mod effects;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;
