pub mod history_file;

pub use history_file::{load_file, parse_records, LoadError};
