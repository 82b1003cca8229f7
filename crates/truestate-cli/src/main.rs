//! TruEstate Retail Sales CLI.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::Context;
use clap::{ColorChoice, Parser};
use tokio::io::BufReader;
use tracing::info;
use tracing::level_filters::LevelFilter;

use truestate_cli::logging::{LogConfig, LogFormat, init_logging};
use truestate_cli::render::{filter_options_table, sort_options_table};
use truestate_cli::session;
use truestate_client::{ClientConfig, SalesClient};
use truestate_core::Dashboard;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(),
        Command::Options => {
            run_options();
            Ok(())
        }
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run_shell() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(async {
        let config = ClientConfig::from_env();
        info!(endpoint = %config.sales_url(), "starting dashboard session");
        let client = SalesClient::new(&config).context("failed to create sales client")?;
        let (dashboard, messages) = Dashboard::new(Arc::new(client));
        session::run(dashboard, messages, BufReader::new(tokio::io::stdin()))
            .await
            .context("failed to read input")
    })
}

fn run_options() {
    println!("{}", filter_options_table());
    println!("{}", sort_options_table());
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = config
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
