use super::history::ForwardPolicy;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BrowserSettings {
    /// File replayed into the history on startup.
    pub history_file: Option<PathBuf>,
    pub forward_policy: ForwardPolicy,
    pub delimiter: char,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            history_file: None,
            forward_policy: ForwardPolicy::default(),
            delimiter: ',',
        }
    }
}
