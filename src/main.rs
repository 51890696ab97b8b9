//! Tined - A tiny byte-driven terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! tined notes.txt
//! tined --write notes.txt
//! tined --log-file tined.log notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use tined::app::{App, stderr_log_writer};
use tined::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// A tiny byte-driven terminal text editor
#[derive(Parser, Debug)]
#[command(name = "tined", version, about, long_about = None)]
struct Cli {
    /// File to edit; created on write if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write the buffer back to FILE on quit when modified
    #[arg(short, long)]
    write: bool,

    /// Write log output to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Initialize logging.
///
/// Detailed output goes to a log file. Without one, warnings go to
/// stderr, and only once the terminal has been restored.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::DEBUG.into()),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::WARN.into()),
            )
            .with_writer(stderr_log_writer)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_tracing(cli.log_file.as_deref().or(effective.log_file.as_deref()))?;
    tracing::debug!(?effective, file = ?cli.file, "starting");

    let app = App::new(cli.file).with_write_on_quit(effective.write || cli.write);

    app.run().context("Application error")
}
