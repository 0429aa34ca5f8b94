use super::clock::{Clock, SystemClock};
use super::history::History;
use super::settings::BrowserSettings;
use crate::input::TokenReader;
use crate::loader::{self, LoadError};
use crate::ui::{render_menu, MenuAction};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to load history: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One browsing session: the history engine plus the menu that drives it.
pub struct Browser {
    history: History,
    settings: BrowserSettings,
    clock: Box<dyn Clock>,
}

impl Browser {
    pub fn new(settings: BrowserSettings) -> Self {
        Self::with_clock(settings, Box::new(SystemClock))
    }

    pub fn with_clock(settings: BrowserSettings, clock: Box<dyn Clock>) -> Self {
        Self {
            history: History::with_policy(settings.forward_policy),
            settings,
            clock,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Replays the configured history file, if any. Returns the number of
    /// records loaded.
    pub fn load_history_file(&mut self) -> Result<usize, LoadError> {
        let Some(path) = &self.settings.history_file else {
            return Ok(0);
        };
        let records = loader::load_file(path, self.settings.delimiter)?;
        let count = self.history.load(records);
        log::info!("Loaded {} history entries from {}", count, path.display());
        Ok(count)
    }

    /// Loads the history file and runs the menu until Quit or end of input.
    pub fn start<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), BrowserError> {
        self.load_history_file()?;
        self.run_menu(input, &mut output)?;
        Ok(())
    }

    pub fn run_menu<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let mut tokens = TokenReader::new(input);

        loop {
            render_menu(output, self.history.current_page().ok())?;
            output.flush()?;

            let Some(selection) = tokens.next_token()? else {
                log::debug!("Input closed, leaving menu");
                return Ok(());
            };

            match MenuAction::parse(&selection) {
                Some(MenuAction::DisplayHistory) => write!(output, "{}", self.history)?,
                Some(MenuAction::Back) => {
                    self.history.back(1);
                }
                Some(MenuAction::Forward) => {
                    self.history.forward(1);
                }
                Some(MenuAction::Visit) => {
                    writeln!(output, "Enter the URL of the new site:")?;
                    output.flush()?;
                    let Some(url) = tokens.next_token()? else {
                        return Ok(());
                    };
                    self.history.visit_now(url, self.clock.as_ref());
                }
                Some(MenuAction::Quit) => {
                    writeln!(output, "Ending Browser History Simulator")?;
                    return Ok(());
                }
                None => {
                    log::warn!("Ignoring menu selection {:?}", selection);
                    writeln!(output)?;
                }
            }
        }
    }
}
