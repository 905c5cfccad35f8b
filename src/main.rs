// vsenv: Visual Studio Developer Environment Capture
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Setup (default) | Diff | Locate | Options | Inis | Version
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use vsenv::cli::{self, Command};
use vsenv::cmd::config::{build_config_loader, run_inis_command, run_options_command};
use vsenv::cmd::locate::run_locate_command;
use vsenv::cmd::setup::{run_diff_command, run_setup_command};
use vsenv::config::Config;
use vsenv::export::workflow_error;
use vsenv::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let mut overrides = cli.global.to_config_overrides();
    if let Some(Command::Setup(args)) = &cli.command {
        overrides.extend(args.to_config_overrides());
    }
    let loader = build_config_loader(&cli.global, &overrides);

    if matches!(cli.command, Some(Command::Inis)) {
        run_inis_command(&loader.format_loaded_files());
        return ExitCode::SUCCESS;
    }

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => return report_failure(&e.context("Failed to load config")),
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(cli.command.as_ref(), &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_ansi(std::io::stderr().is_terminal() || running_in_github_actions())
        .build()
}

async fn dispatch_command(command: Option<&Command>, config: &Config) -> vsenv::error::Result<()> {
    match command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Locate) => run_locate_command(config).await,
        Some(Command::Diff) => run_diff_command(config).await,
        Some(Command::Setup(_)) | None => run_setup_command(config).await,
        Some(Command::Version | Command::Inis) => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn running_in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}

fn report_failure(error: &anyhow::Error) -> ExitCode {
    let message = format!("{error:#}");
    eprintln!("Error: {message}");
    if running_in_github_actions() {
        println!("{}", workflow_error(&message));
    }
    ExitCode::FAILURE
}
