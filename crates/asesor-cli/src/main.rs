//! asesor - tutoring sessions from the terminal
//!
//! An interactive shell over the asesorías REST backend.
//!
//! # Examples
//!
//! ```bash
//! # Use the configured backend (.asesor/config.toml or ASESOR_* variables)
//! asesor
//!
//! # Point at a local backend with a short timeout
//! asesor --server http://127.0.0.1:8000 --timeout 5
//! ```

mod cli;

use crate::cli::Cli;

use asesor_cli::{
    Client,
    error::Result as AppResult,
    logger,
    shell::{Flow, PromptError, Shell, TerminalPrompter, render},
};
use asesor_config::{Config, LogLevel};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let client = Client::new(&config.api.base_url, config.api.timeout())?;
    let mut shell = Shell::new(client, &config.api);
    let mut prompter = TerminalPrompter::new()?;

    let mut out = Vec::new();
    shell.welcome(&mut out);
    render(&out);

    loop {
        let username = shell
            .session()
            .identity()
            .map(|identity| identity.username.clone());

        let line = match prompter.read_command(username.as_deref()) {
            Ok(line) => line,
            Err(PromptError::Cancelled) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(PromptError::Closed) => break,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }

        let mut out = Vec::new();
        let flow = shell.handle(&line, &mut prompter, &mut out).await;
        render(&out);

        if flow == Flow::Quit {
            break;
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
