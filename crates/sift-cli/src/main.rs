//! `sift` command-line runner.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use sift_cli::commands::{run_filter, run_handle};
use sift_cli::logging::{LogConfig, LogFormat, init_logging};
use sift_cli::summary::{eprint_summary, print_summary};

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
    let exit_code = match &cli.command {
        Command::Handle(args) => match run_handle(&args.to_request()) {
            Ok(result) => match serde_json::to_string_pretty(&result.response) {
                Ok(json) => {
                    println!("{json}");
                    if let Some(summary) = &result.summary {
                        print_summary(summary);
                    }
                    0
                }
                Err(error) => {
                    eprintln!("error: encode response: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Filter(args) => match run_filter(&args.to_request()) {
            Ok(result) => {
                if args.output.is_some() {
                    print_summary(&result.summary);
                } else {
                    eprint_summary(&result.summary);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
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
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_timestamps = cli.log_timestamps;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_timestamps_reach_the_config() {
        let cli = Cli::try_parse_from(["sift", "--log-timestamps", "filter", "a.csv"]).unwrap();
        assert!(log_config_from_cli(&cli).with_timestamps);

        let cli = Cli::try_parse_from(["sift", "filter", "a.csv"]).unwrap();
        assert!(!log_config_from_cli(&cli).with_timestamps);
    }
}
