pub mod menu;

pub use menu::{render_menu, MenuAction};
