//! CLI argument definitions for the replay tool.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
    name = "ai-assistant-replay",
    version,
    about = "Replay AI assistant store actions and print the resulting state",
    long_about = "Seed the AI assistant store from a server-rendered bootstrap state,\n\
                  replay a JSON array of actions through it and print the final\n\
                  state as JSON. Deferred feature syncs are recorded, never fired."
)]
pub struct Cli {
    /// JSON file with the editor initial state (defaults apply when omitted).
    #[arg(long, value_name = "PATH")]
    pub bootstrap: Option<PathBuf>,

    /// JSON file with an array of actions, or "-" for stdin.
    #[arg(long, value_name = "PATH")]
    pub actions: PathBuf,

    /// TOML store config (otherwise discovered from CWD or home directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the state after every action, one JSON document per line.
    #[arg(long)]
    pub steps: bool,

    /// Pretty-print the final state.
    #[arg(long, conflicts_with = "steps")]
    pub pretty: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}
