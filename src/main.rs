use anyhow::{Context, Result};
use std::path::PathBuf;
use term_views::app::App;
use term_views::cli::{self, DriverCommand, RuntimeOptions};
use term_views::session::storage;
use term_views_config::profile::profiles_path;
use term_views_config::{ColorSchemeManager, Config, load_profiles_from};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // CLI --log-level wins, then RUST_LOG, then the config file
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = term_views::debug::effective_level(
        options.log_level,
        rust_log.as_deref(),
        config.log_level.to_level_filter(),
    );
    term_views::debug::init_log_bridge(level);
    log::info!("Starting term-views {}", term_views::VERSION);

    let result = run(config, &options);
    if let Err(ref e) = result {
        eprintln!("term-views: error: {e:#}");
    }
    result
}

fn run(config: Config, options: &RuntimeOptions) -> Result<()> {
    let profiles_file = options.profiles.clone().unwrap_or_else(profiles_path);
    let profiles = load_profiles_from(&profiles_file)?;
    let session_file: PathBuf = options
        .session_file
        .clone()
        .unwrap_or_else(storage::session_path);
    let commands = load_commands(options)?;
    let restore = config.restore_session && !options.no_restore;

    let mut app = App::new(config, profiles, ColorSchemeManager::new());
    let first = if restore {
        app.restore_state_from(&session_file)?
            .first()
            .copied()
    } else {
        Some(app.new_window_with_session().0)
    };

    let mut current = first;
    for command in &commands {
        let Some(window) = current else {
            log::warn!("All windows closed, skipping remaining commands");
            break;
        };
        current = app.execute(window, command);
    }

    if options.print_layout {
        println!("{}", app.layout_summary());
    }

    if !options.no_save {
        if app.window_count() > 0 {
            app.save_state_to(&session_file)?;
        } else {
            storage::clear_session_at(&session_file)?;
        }
    }
    app.shutdown();
    log::info!("term-views exiting");
    Ok(())
}

/// Script commands followed by `--exec` commands
fn load_commands(options: &RuntimeOptions) -> Result<Vec<DriverCommand>> {
    let mut commands = match &options.script {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {:?}", path))?;
            cli::parse_script(&text)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid script {:?}", path))?
        }
        None => Vec::new(),
    };
    for line in &options.exec {
        let command = line
            .parse::<DriverCommand>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid command '{}'", line))?;
        commands.push(command);
    }
    Ok(commands)
}
