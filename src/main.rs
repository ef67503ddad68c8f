use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use tally::OutputFormat;
use tally::core::config::{self, CliOverrides, ResolvedConfig};
use tally::{headless, tui};

#[derive(Parser)]
#[command(name = "tally", version, about = "A four-function calculator for the terminal")]
struct Args {
    /// Run a key script instead of the interactive UI, e.g. "12+7=" or "5{negate}%"
    #[arg(short, long)]
    keys: Option<String>,

    /// With --keys, print the display after every key
    #[arg(long, requires = "keys")]
    trace: bool,

    /// Output format for --keys
    #[arg(long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Config file to use instead of ~/.tally/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Hide the on-screen keypad
    #[arg(long)]
    no_keypad: bool,
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let (file_config, config_error) = match loaded {
        Ok(file_config) => (file_config, None),
        Err(e) => (Default::default(), Some(e)),
    };

    let overrides = CliOverrides {
        log_level: args.log_level.clone(),
        no_keypad: args.no_keypad,
    };
    let resolved = config::resolve(&file_config, &overrides);
    init_logging(&resolved);

    // The logger didn't exist yet when loading and resolving ran
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::info!("Tally v{} starting up", env!("CARGO_PKG_VERSION"));

    if let Some(keys) = &args.keys {
        return match headless::run(keys, args.trace, args.format) {
            Ok(output) => {
                println!("{}", output);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("tally: {}", e);
                Ok(ExitCode::from(2))
            }
        };
    }

    tui::run(&resolved)?;
    Ok(ExitCode::SUCCESS)
}

/// Write logs to the configured file. Logging is best effort: a file we
/// can't create just means no log.
fn init_logging(resolved: &ResolvedConfig) {
    let Some(path) = &resolved.log_file else {
        return;
    };
    if resolved.log_level == LevelFilter::Off {
        return;
    }
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
