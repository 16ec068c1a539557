use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use emojinorm_core::{pipeline, Config, Mode, Overrides};

#[derive(Parser)]
#[command(
    name = "emojinorm",
    about = "Normalize or deduplicate the \"e\" field of emoji search records"
)]
struct Cli {
    /// Input JSON file (an array of objects).
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Destination for the rewritten document.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Transform to apply: dedup or normalize.
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Config file; defaults to ~/.config/emojinorm/config.toml if present.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spaces per indentation level in the output.
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Write non-ASCII characters as \uXXXX escapes.
    #[arg(long)]
    escape_unicode: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            mode: self.mode,
            indent: self.indent,
            escape_unicode: self.escape_unicode.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: invalid configuration: {err:#}");
            return ExitCode::from(2);
        }
    };

    match pipeline::run(&config) {
        Ok(report) => {
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, kind = ?err.kind(), "run failed");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = Config::load(&cli.overrides())?;
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}
