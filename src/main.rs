//! asset-hints - adds resource hints to a built HTML page.

mod cli;
mod config;
mod hints;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::HintsConfig;
use hints::Processor;
use logger::Terminal;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = HintsConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }
    debug!("config"; "input: {}", config.input_path().display());
    debug!("config"; "output: {}", config.output_path().display());

    // The processor has already reported the failing step
    if let Err(e) = Processor::new(&config, Terminal).run() {
        log!("error"; "{:#}", anyhow::Error::from(e));
        std::process::exit(1);
    }

    Ok(())
}
