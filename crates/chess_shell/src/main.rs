//! Two-player chess in the terminal.
//!
//! Usage: `chess_shell [--config <path>]`

use anyhow::{Context, Result, bail};
use chess_shell::{DEFAULT_CONFIG_PATH, Renderer, Session, ShellConfig, run};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Two-player chess");
    println!();
    println!("Usage:");
    println!("  chess_shell [--config <path>]");
    println!();
    println!("Options:");
    println!("  -c, --config <path>   TOML config file (default: {DEFAULT_CONFIG_PATH})");
    println!("  -h, --help            show this text");
    println!();
    println!("Set RUST_LOG to override the configured log filter.");
}

/// `None` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<PathBuf>> {
    let mut config = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a path");
                };
                config = PathBuf::from(path);
                i += 1;
            }
            "--help" | "-h" | "help" => return Ok(None),
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config_path) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let config = ShellConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if config_path.exists() {
        info!(path = %config_path.display(), "loaded config");
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
    }

    let renderer = Renderer::from(&config);
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, &renderer, stdin.lock(), &mut stdout)?;
    Ok(())
}
