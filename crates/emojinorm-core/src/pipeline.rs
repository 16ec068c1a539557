//! Pipeline — one run from input file to output file.
//!
//! ```text
//! read ──► parse ──► transform ──► render ──► write
//! ```
//!
//! Every step before `write` completes in memory, so a run that fails never
//! creates or truncates the output file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format;
use crate::normalizer::TransformStats;
use crate::types::{Document, Mode};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: Mode,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub stats: TransformStats,
    pub bytes_written: usize,
}

impl Report {
    /// Completion line printed by the binary.
    pub fn summary(&self) -> String {
        match self.mode {
            Mode::Dedup => format!(
                "Duplicates removed. Updated data saved to {}",
                self.output_path.display()
            ),
            Mode::Normalize => format!("Processed JSON saved to {}", self.output_path.display()),
        }
    }
}

/// Execute the configured transform end to end.
pub fn run(config: &Config) -> Result<Report> {
    let mut document = load(&config.input_path)?;
    tracing::debug!(
        path = %config.input_path.display(),
        records = document.len(),
        "document loaded"
    );

    let stats = config.mode.apply(&mut document);
    tracing::debug!(mode = %config.mode, ?stats, "transform applied");

    let bytes = format::render(&document, &config.output).map_err(Error::Render)?;
    fs::write(&config.output_path, &bytes).map_err(|source| Error::Write {
        path: config.output_path.clone(),
        source,
    })?;

    tracing::info!(
        mode = %config.mode,
        output = %config.output_path.display(),
        records = stats.records,
        records_changed = stats.records_changed,
        duplicates_removed = stats.duplicates_removed,
        strings_lowercased = stats.strings_lowercased,
        "run complete"
    );

    Ok(Report {
        mode: config.mode,
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        stats,
        bytes_written: bytes.len(),
    })
}

/// Read and parse the input document.
pub fn load(path: &Path) -> Result<Document> {
    let raw = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::MissingFile {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Document::from_json_slice(&raw).map_err(|source| {
        tracing::debug!(
            path = %path.display(),
            line = source.line(),
            column = source.column(),
            category = ?source.classify(),
            "input is not a JSON array of objects"
        );
        Error::MalformedJson {
            path: path.to_path_buf(),
            source,
        }
    })
}
