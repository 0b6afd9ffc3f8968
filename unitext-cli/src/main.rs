//! Unitext command-line interface

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use unitext_cli::commands::{Commands, Context};
use unitext_cli::config::CliConfig;
use unitext_cli::output::OutputFormat;

/// Unicode text segmentation, case folding and tokenizer explorer
#[derive(Debug, Parser)]
#[command(name = "unitext", author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE", env = "UNITEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format, overriding the configuration
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
        }
    }

    fn context(&self) -> Result<Context> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let format = self.format.unwrap_or(config.output.format);
        log::debug!("Using {format:?} output with {config:?}");
        Ok(Context {
            config,
            format,
            quiet: self.quiet,
        })
    }

    fn run(&self) -> Result<ExitCode> {
        let ctx = self.context()?;
        self.command.execute(&ctx)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match cli.run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
