//! CLI definition using clap

use clap::{Parser, Subcommand};
use oversize_types::{LogFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "oversize-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Check whether a package is oversized by dimensions and weight")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON responses
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single package given on the command line
    Check {
        /// Length in inches (number or numeric string)
        #[arg(long, short = 'l', allow_hyphen_values = true)]
        length: Option<String>,

        /// Width in inches
        #[arg(long, short = 'w', allow_hyphen_values = true)]
        width: Option<String>,

        /// Height in inches
        #[arg(long, short = 'H', allow_hyphen_values = true)]
        height: Option<String>,

        /// Weight in grams
        #[arg(long, short = 'g', allow_hyphen_values = true)]
        weight: Option<String>,
    },

    /// Run one raw invocation context (JSON) and print the response
    Invoke {
        /// Context JSON, e.g. '{"arguments": {"length": 70}}'. Read from stdin if omitted.
        #[arg(long, short = 'c')]
        context: Option<String>,
    },

    /// Serve invocations over stdio, one JSON context per line
    Serve,

    /// Print the tool registration metadata
    Describe {
        /// Print only the `toolProperties` JSON string passed at registration
        #[arg(long)]
        properties: bool,
    },

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set JSON pretty-printing
        #[arg(long)]
        set_pretty: Option<bool>,

        /// Set log level filter (e.g. info, debug, oversize_app=trace)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set log format
        #[arg(long)]
        set_log_format: Option<LogFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_accepts_negative_values() {
        let cli = Cli::try_parse_from(["oversize-checker", "check", "--length", "-5", "-g", "10"])
            .unwrap();
        match cli.command {
            Commands::Check { length, weight, .. } => {
                assert_eq!(length.as_deref(), Some("-5"));
                assert_eq!(weight.as_deref(), Some("10"));
            }
            _ => panic!("expected check"),
        }
    }
}
