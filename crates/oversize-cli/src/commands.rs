//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::output_response;
use oversize_app::config::Config;
use oversize_app::logging;
use oversize_app::observer::TracingObserver;
use oversize_app::tool::{tool_definition, PackageCheckTool};
use oversize_types::{LogFormat, OutputFormat, PackageField, Result};
use serde_json::{Map, Value};
use std::io::{BufRead, Read, Write};
use std::sync::Arc;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    logging::init(&log_level, config.log_format)?;

    let output_format = cli.format.unwrap_or(config.output_format);
    let pretty = cli.pretty || config.pretty;
    let tool = PackageCheckTool::new(Arc::new(TracingObserver)).with_pretty(pretty);

    match cli.command {
        Commands::Check {
            length,
            width,
            height,
            weight,
        } => cmd_check(&tool, output_format, [length, width, height, weight]),

        Commands::Invoke { context } => cmd_invoke(&tool, context),

        Commands::Serve => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let served = serve_lines(&tool, stdin.lock(), stdout.lock())?;
            tracing::info!(served, "stdio session closed");
            Ok(())
        }

        Commands::Describe { properties } => cmd_describe(properties),

        Commands::Config {
            show,
            set_output,
            set_pretty,
            set_log_level,
            set_log_format,
            reset,
        } => cmd_config(
            show,
            set_output,
            set_pretty,
            set_log_level,
            set_log_format,
            reset,
        ),
    }
}

fn cmd_check(
    tool: &PackageCheckTool,
    output_format: OutputFormat,
    values: [Option<String>; 4],
) -> Result<()> {
    let context = build_context(values);
    let response = tool.handle_value(&context);
    output_response(output_format, tool, &response)
}

/// Build an invocation context from optional raw field values; omitted
/// fields are left out so the tool applies its own defaults.
fn build_context(values: [Option<String>; 4]) -> Value {
    let mut arguments = Map::new();
    for (field, value) in PackageField::ALL.into_iter().zip(values) {
        if let Some(raw) = value {
            arguments.insert(field.key().to_string(), Value::String(raw));
        }
    }
    let mut context = Map::new();
    context.insert("arguments".to_string(), Value::Object(arguments));
    Value::Object(context)
}

fn cmd_describe(properties: bool) -> Result<()> {
    let definition = tool_definition();
    let content = if properties {
        definition.properties_json()?
    } else {
        serde_json::to_string_pretty(&definition)?
    };
    println!("{}", content);
    Ok(())
}

fn cmd_invoke(tool: &PackageCheckTool, context: Option<String>) -> Result<()> {
    let context = match context {
        Some(context) => context,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    println!("{}", tool.handle(&context));
    Ok(())
}

/// Answer one context per input line until EOF. Returns the number of
/// responses written.
pub fn serve_lines<R: BufRead, W: Write>(
    tool: &PackageCheckTool,
    reader: R,
    mut writer: W,
) -> Result<usize> {
    let mut served = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // One response per line regardless of the pretty setting.
        let response = tool.invoke(&line).to_json(false);
        writeln!(writer, "{}", response)?;
        writer.flush()?;
        served += 1;
    }
    Ok(served)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_pretty: Option<bool>,
    set_log_level: Option<String>,
    set_log_format: Option<LogFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(pretty) = set_pretty {
        config.pretty = pretty;
        modified = true;
    }

    if let Some(log_level) = set_log_level {
        config.log_level = log_level;
        modified = true;
    }

    if let Some(log_format) = set_log_format {
        config.log_format = log_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("Config file: {}", Config::config_path()?.display());
        println!("\n{}", config);
    }

    Ok(())
}
