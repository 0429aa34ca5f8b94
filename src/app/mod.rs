pub mod browser;
pub mod clock;
pub mod entry;
pub mod history;
pub mod settings;

pub use browser::{Browser, BrowserError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::NavigationEntry;
pub use history::{ForwardPolicy, History, HistoryError};
pub use settings::BrowserSettings;
