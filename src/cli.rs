//! Command-line interface for term-views.
//!
//! The binary is a headless driver: it restores (or starts) windows, replays
//! a script of window commands against them, prints the resulting layout and
//! saves the session state on exit.

use crate::actions::{ActionCollection, ViewAction};
use crate::types::SessionId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// term-views - headless driver for tabbed, split-pane terminal windows
#[derive(Parser)]
#[command(name = "term-views")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: ~/.config/term-views/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profiles file (default: ~/.config/term-views/profiles.yaml)
    #[arg(long, value_name = "PATH")]
    pub profiles: Option<PathBuf>,

    /// Session state file to restore from and save to
    #[arg(long, value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Start with a fresh window instead of restoring the last session
    #[arg(long)]
    pub no_restore: bool,

    /// Do not write the session state on exit
    #[arg(long)]
    pub no_save: bool,

    /// Script of window commands, one per line
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Window command to run after the script (repeatable)
    #[arg(short = 'x', long = "exec", value_name = "COMMAND")]
    pub exec: Vec<String>,

    /// Print the final window layout to stdout
    #[arg(long)]
    pub print_layout: bool,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List window actions with their default shortcuts
    ListActions,
}

/// Runtime options passed from CLI to the driver
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub config: Option<PathBuf>,
    pub profiles: Option<PathBuf>,
    pub session_file: Option<PathBuf>,
    pub no_restore: bool,
    pub no_save: bool,
    pub script: Option<PathBuf>,
    /// Commands given with `--exec`, run after the script
    pub exec: Vec<String>,
    pub print_layout: bool,
    /// Log level override from CLI
    pub log_level: Option<log::LevelFilter>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ListActions) => {
            print!("{}", action_listing(&ActionCollection::new()));
            CliResult::Exit(0)
        }
        None => CliResult::Continue(RuntimeOptions {
            config: cli.config,
            profiles: cli.profiles,
            session_file: cli.session_file,
            no_restore: cli.no_restore,
            no_save: cli.no_save,
            script: cli.script,
            exec: cli.exec,
            print_layout: cli.print_layout,
            log_level: cli.log_level.map(LogLevelArg::to_level_filter),
        }),
    }
}

/// One line per action: name, then its shortcuts
pub fn action_listing(actions: &ActionCollection) -> String {
    let mut out = String::new();
    for action in actions.actions() {
        let shortcuts = actions.shortcuts(*action).join(", ");
        out.push_str(&format!("{:<24} {}\n", action.name(), shortcuts));
    }
    out
}

/// A command the driver runs against the current window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    /// `new-session [profile [directory]]`
    NewSession {
        profile: Option<String>,
        directory: Option<String>,
    },
    /// `finish <session>`: the session's process exited
    Finish(SessionId),
    /// `window <n>`: make the n-th open window (1-based) current
    Window(usize),
    /// `shortcut <keys>`
    Shortcut(String),
    /// A named action such as `next-view`
    Action(ViewAction),
}

impl FromStr for DriverCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(|| "empty command".to_string())?;
        let rest: Vec<&str> = words.collect();
        match head {
            "new-session" => Ok(DriverCommand::NewSession {
                profile: rest.first().map(|s| s.to_string()),
                directory: rest.get(1).map(|s| s.to_string()),
            }),
            "finish" => rest
                .first()
                .and_then(|s| s.parse::<SessionId>().ok())
                .map(DriverCommand::Finish)
                .ok_or_else(|| format!("'{}' needs a session id", head)),
            "window" => rest
                .first()
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .map(DriverCommand::Window)
                .ok_or_else(|| format!("'{}' needs a window number", head)),
            "shortcut" => rest
                .first()
                .map(|s| DriverCommand::Shortcut(s.to_string()))
                .ok_or_else(|| format!("'{}' needs a key sequence", head)),
            name => name
                .parse::<ViewAction>()
                .map(DriverCommand::Action)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Parse a script, skipping blank lines and `#` comments
///
/// Errors carry the 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<DriverCommand>, String> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| line.parse::<DriverCommand>().map_err(|e| format!("line {}: {}", n, e)))
        .collect()
}
