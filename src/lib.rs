pub mod app;
pub mod collections;
pub mod input;
pub mod loader;
pub mod ui;

pub use app::browser::Browser;
pub use app::{History, NavigationEntry};
pub use collections::Stack;
