pub mod demo;
pub mod misc;
pub mod table;
pub mod theme;

pub use demo::handle_demo;
pub use misc::handle_completions;
pub use table::handle_table;
pub use theme::{handle_theme_init, handle_theme_show};
