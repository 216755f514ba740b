//! daydial command-line entry point.
//!
//! Parses arguments, loads the configuration and dispatches to the command
//! handlers. Errors are logged and turned into a non-zero exit code.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use daydial::args::{Cli, Command};
use daydial::commands::{color, list, render, timeline};
use daydial::config::Config;
use daydial::constants::EXIT_FAILURE;
use daydial::logger::Log;

/// Load the explicit config file, or the default one (falling back to the
/// built-in defaults when it cannot be used).
fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        let config = Config::load_from_path(path)?;
        if Log::is_debug() {
            config.log_config(Some(path));
        }
        return Ok(config);
    }

    match Config::load() {
        Ok(config) => {
            if Log::is_debug() {
                config.log_config(Config::get_config_path().ok().as_deref());
            }
            Ok(config)
        }
        Err(e) => {
            Log::log_warning(&format!("{:#}", e));
            Log::log_info("Falling back to built-in defaults");
            let config = Config::default();
            if Log::is_debug() {
                config.log_config(None);
            }
            Ok(config)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Command::List => list::handle_list_command(&config),
        Command::Color(args) => color::handle_color_command(&config, args),
        Command::Timeline(args) => timeline::handle_timeline_command(&config, args),
        Command::Render(args) => render::handle_render_command(&config, args),
    }
}

fn main() {
    let cli = Cli::parse();
    Log::set_enabled(!cli.quiet);
    Log::set_debug(cli.debug);
    if cli.debug {
        Log::log_version();
    }

    let result = run(&cli);

    if cli.debug {
        Log::log_end();
    }
    if let Err(e) = result {
        Log::log_error(&format!("{:#}", e));
        std::process::exit(EXIT_FAILURE);
    }
}
