//! emojinorm-core — document model and transforms for emojinorm.
//!
//! Loads a JSON array of emoji records, rewrites the `"e"` field of each
//! record in one of two modes, and writes the result back out.
//!
//! # Architecture
//!
//! ```text
//! config ──► pipeline ──► normalizer ──► format
//!               │
//!               └──► error
//! ```
//!
//! Everything runs synchronously on the calling thread; a run holds exactly
//! one in-memory [`Document`].

pub mod config;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod pipeline;
pub mod types;

pub use config::{Config, OutputConfig, Overrides};
pub use error::{Error, ErrorKind};
pub use normalizer::{deduplicate, normalize_case, TransformStats};
pub use pipeline::{run, Report};
pub use types::{Document, FieldShape, Mode, Record, FIELD};
