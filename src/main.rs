//! Orbital HUD CLI - a passphrase-gated mission control dashboard.

use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use clap::Parser;
use orbital_hud::cli::{Cli, Commands, ThemeCommands};
use orbital_hud::commands::{self, Output};
use orbital_hud::config::{HudConfig, ResolvedConfig, default_config_path, resolve_config};
use orbital_hud::logging;
use orbital_hud::models::{DataProvider, provider_for};
use orbital_hud::storage::{BackendType, Storage, get_data_dir};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), orbital_hud::Error> {
    let config = load_config(&cli)?;
    let data_dir = get_data_dir(cli.data_dir.as_deref())?;
    let provider = provider_for(cli.data.as_deref());
    let command = cli.command.unwrap_or(Commands::Tui);

    if matches!(command, Commands::Tui) {
        // An unusable data dir only costs the log file
        if let Err(e) = logging::init_file(&data_dir, config.log_level.as_deref(), cli.verbose) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    } else {
        logging::init_stderr(config.log_level.as_deref(), cli.verbose);
    }
    tracing::debug!(
        data_dir = %data_dir.display(),
        data = %provider.describe(),
        layout = %config.layout.value,
        layout_source = %config.layout.source,
        "resolved settings"
    );

    let mut storage = open_storage(cli.ephemeral, &data_dir);

    match command {
        Commands::Tui => run_tui(storage, provider.as_ref(), &config),
        Commands::Render { json } => {
            let result = commands::render(&storage, provider.as_ref(), config.hud_options())?;
            output(&result, json);
            Ok(())
        }
        Commands::Status { json } => {
            let result = commands::status(&storage, &data_dir, provider.as_ref(), &config);
            output(&result, json);
            Ok(())
        }
        Commands::Login { json } => {
            let passphrase = read_passphrase()?;
            let result = commands::login(&mut storage, &passphrase);
            if result.rejected() {
                if json {
                    println!("{}", result.to_json());
                }
                eprintln!("{}", result.to_human());
                process::exit(1);
            }
            output(&result, json);
            Ok(())
        }
        Commands::Logout { json } => {
            output(&commands::logout(&mut storage), json);
            Ok(())
        }
        Commands::Theme { command } => {
            let (result, json) = match command {
                ThemeCommands::Show { json } => (commands::theme_show(&storage), json),
                ThemeCommands::Toggle { json } => (commands::theme_toggle(&mut storage), json),
                ThemeCommands::Set { theme, json } => {
                    (commands::theme_set(&mut storage, theme.into()), json)
                }
            };
            output(&result, json);
            Ok(())
        }
    }
}

/// Read config.kdl from `--config`, `HUD_CONFIG`, or the default location,
/// then layer CLI flags on top.
fn load_config(cli: &Cli) -> Result<ResolvedConfig, orbital_hud::Error> {
    let path = cli.config.clone().or_else(default_config_path);
    let file = match &path {
        Some(path) => HudConfig::load(path)?,
        None => HudConfig::default(),
    };
    Ok(resolve_config(&file, &cli.overrides()))
}

fn open_storage(ephemeral: bool, data_dir: &Path) -> Storage {
    let backend = if ephemeral {
        BackendType::Memory
    } else {
        BackendType::File
    };
    Storage::open_with_backend(backend, data_dir)
}

/// One line from stdin, without its line terminator.
fn read_passphrase() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(feature = "tui")]
fn run_tui(
    storage: Storage,
    provider: &dyn DataProvider,
    config: &ResolvedConfig,
) -> Result<(), orbital_hud::Error> {
    let data = provider.load()?;
    orbital_hud::tui::run_tui(storage, data, config.hud_options())
}

#[cfg(not(feature = "tui"))]
fn run_tui(
    _storage: Storage,
    _provider: &dyn DataProvider,
    _config: &ResolvedConfig,
) -> Result<(), orbital_hud::Error> {
    Err(orbital_hud::Error::Other(
        "built without the `tui` feature; use `hud render` instead".to_string(),
    ))
}

fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}
