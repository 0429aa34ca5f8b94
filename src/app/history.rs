use super::clock::Clock;
use super::entry::NavigationEntry;
use crate::collections::Stack;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No current page exists")]
    NoCurrentPage,
}

/// What a fresh visit does to the forward history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForwardPolicy {
    /// Forward history survives new visits.
    #[default]
    Preserve,
    /// A new visit drops the forward history, like most real browsers.
    Clear,
}

/// Two-stack navigation history around a current page.
///
/// `back` holds the pages left by visiting or going forward, most recent on
/// top. `forward` holds the pages left by going back. An entry lives in
/// exactly one of `back`, `forward` or `current`.
#[derive(Debug, Default)]
pub struct History {
    back: Stack<NavigationEntry>,
    forward: Stack<NavigationEntry>,
    current: Option<NavigationEntry>,
    policy: ForwardPolicy,
}

impl History {
    pub fn new() -> Self {
        Self::with_policy(ForwardPolicy::default())
    }

    pub fn with_policy(policy: ForwardPolicy) -> Self {
        Self {
            back: Stack::new(),
            forward: Stack::new(),
            current: None,
            policy,
        }
    }

    pub fn visit(&mut self, url: impl Into<String>, timestamp: i64) {
        self.push_entry(NavigationEntry::new(url, timestamp));
    }

    /// Visits `url` stamped with the clock's current time.
    pub fn visit_now(&mut self, url: impl Into<String>, clock: &dyn Clock) {
        self.visit(url, clock.now());
    }

    fn push_entry(&mut self, entry: NavigationEntry) {
        if let Some(previous) = self.current.replace(entry) {
            self.back.push(previous);
        }
        if self.policy == ForwardPolicy::Clear && !self.forward.is_empty() {
            log::debug!("Dropping {} forward entries", self.forward.len());
            self.forward.clear();
        }
    }

    /// Moves up to `steps` pages back. Stops early once the back history runs
    /// out; with no back history this does nothing.
    pub fn back(&mut self, steps: usize) -> Option<&NavigationEntry> {
        let moved = shift(&mut self.back, &mut self.forward, &mut self.current, steps);
        log::debug!("Went back {} of {} steps", moved, steps);
        self.current.as_ref()
    }

    /// Mirror of [`History::back`] over the forward history.
    pub fn forward(&mut self, steps: usize) -> Option<&NavigationEntry> {
        let moved = shift(&mut self.forward, &mut self.back, &mut self.current, steps);
        log::debug!("Went forward {} of {} steps", moved, steps);
        self.current.as_ref()
    }

    pub fn current_page(&self) -> Result<&NavigationEntry, HistoryError> {
        self.current.as_ref().ok_or(HistoryError::NoCurrentPage)
    }

    /// Replays recorded visits in order. The last record becomes the current page.
    pub fn load<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = NavigationEntry>,
    {
        let mut count = 0;
        for entry in records {
            self.push_entry(entry);
            count += 1;
        }
        count
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn back_history(&self) -> &Stack<NavigationEntry> {
        &self.back
    }

    pub fn forward_history(&self) -> &Stack<NavigationEntry> {
        &self.forward
    }

    pub fn policy(&self) -> ForwardPolicy {
        self.policy
    }
}

/// Moves the current page onto `to` and pulls the next one off `from`, up to
/// `steps` times. Returns how many moves were made.
fn shift(
    from: &mut Stack<NavigationEntry>,
    to: &mut Stack<NavigationEntry>,
    current: &mut Option<NavigationEntry>,
    steps: usize,
) -> usize {
    let mut moved = 0;
    while moved < steps {
        let Ok(next) = from.pop() else {
            break;
        };
        if let Some(left) = current.replace(next) {
            to.push(left);
        }
        moved += 1;
    }
    moved
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Back Stack**")?;
        writeln!(f, "{}", self.back)?;
        writeln!(f, "**Forward Stack**")?;
        writeln!(f, "{}", self.forward)?;
        match &self.current {
            Some(entry) => writeln!(f, "{}", entry),
            None => writeln!(f, "No current page"),
        }
    }
}
