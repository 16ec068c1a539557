//! Configuration types for emojinorm.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, a
//! TOML config file, `EMOJINORM_*` environment variables, and finally the
//! command-line [`Overrides`]. [`Config::defaults`] returns the embedded
//! defaults without touching the filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::Mode;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
input_path  = "assets/searchEmoji.json"
output_path = "output.json"
mode        = "normalize"

[output]
indent         = 4
escape_unicode = false
"#;

const ENV_PREFIX: &str = "EMOJINORM";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Everything one run needs: where to read, where to write, what to do.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub mode: Mode,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub escape_unicode: bool,
}

fn default_indent() -> usize { 4 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            escape_unicode: false,
        }
    }
}

/// Values supplied on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file; unlike the default location it must exist.
    pub config_file: Option<PathBuf>,
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub indent: Option<usize>,
    pub escape_unicode: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Build the effective configuration for a run.
    pub fn load(overrides: &Overrides) -> anyhow::Result<Self> {
        let file = match &overrides.config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder = builder
            .set_override_option("input_path", overrides.input_path.as_deref().map(path_string))?
            .set_override_option("output_path", overrides.output_path.as_deref().map(path_string))?
            .set_override_option("mode", overrides.mode.map(|m| m.as_str()))?
            .set_override_option("output.indent", overrides.indent.map(|n| n as i64))?
            .set_override_option("output.escape_unicode", overrides.escape_unicode)?;

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Default config file location: `$XDG_CONFIG_HOME/emojinorm/config.toml`,
/// falling back to `~/.config/emojinorm/config.toml`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("emojinorm")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
