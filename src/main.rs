use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zerg::{Level, Logger, ZergConfig};

#[derive(Parser)]
#[command(name = "zerg", about = "Rule-filtered logging channels")]
struct Cli {
    /// TOML configuration file layered over the defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the library's own diagnostics to stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print whether each module is enabled under the active rules.
    Check {
        /// Rule string; replaces the configured rules when given.
        #[arg(long = "rule", allow_hyphen_values = true)]
        rules: Vec<String>,
        /// Module names; may start with `-`.
        #[arg(required = true, allow_hyphen_values = true)]
        modules: Vec<String>,
    },
    /// Emit one event through the console sink.
    Emit {
        #[arg(long = "rule", allow_hyphen_values = true)]
        rules: Vec<String>,
        #[arg(long, allow_hyphen_values = true)]
        module: String,
        #[arg(long, default_value = "info")]
        level: String,
        #[arg(allow_hyphen_values = true)]
        message: String,
        /// Extra arguments, parsed as JSON where possible.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let mut config = ZergConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Check { rules, modules } => {
            if !rules.is_empty() {
                config.rules = rules;
            }
            let logger = Logger::from_config(&config)?;
            for name in modules {
                let state = if logger.module(&name).is_enabled() {
                    "enabled"
                } else {
                    "disabled"
                };
                println!("{name} {state}");
            }
        }
        Command::Emit {
            rules,
            module,
            level,
            message,
            args,
        } => {
            if !rules.is_empty() {
                config.rules = rules;
            }
            let level: Level = level.parse()?;
            let logger = Logger::from_config(&config)?;
            let args = args.iter().map(|raw| {
                serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.clone()))
            });
            logger.module(&module).log_with(level, message, args);
        }
    }

    Ok(())
}
