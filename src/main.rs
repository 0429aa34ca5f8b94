use browser_history::app::{BrowserSettings, ForwardPolicy};
use browser_history::Browser;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "browser-history")]
#[command(about = "Simulates a web browser's back and forward history")]
struct Args {
    /// Saved session to replay on startup, one `url,timestamp` record per line
    history_file: Option<PathBuf>,

    /// Drop the forward history whenever a new site is visited
    #[arg(long = "clear-forward", default_value_t = false, action = clap::ArgAction::SetTrue)]
    clear_forward: bool,

    /// Field delimiter used in the history file
    #[arg(long = "delimiter", default_value_t = ',')]
    delimiter: char,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let settings = BrowserSettings {
        history_file: args.history_file,
        forward_policy: if args.clear_forward {
            ForwardPolicy::Clear
        } else {
            ForwardPolicy::Preserve
        },
        delimiter: args.delimiter,
    };

    let mut browser = Browser::new(settings);
    let stdin = io::stdin();
    if let Err(e) = browser.start(stdin.lock(), io::stdout()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
