//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → rotating JSON file
//!                → fmt layer (warnings) → stderr
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: spans written to `<data_dir>/reactor-explorer-otlp.json`
//! - **Automatic Rotation**: files rotate at 10MB with 3 numbered backups
//! - **OTLP Format**: one OTLP JSON document per exported batch
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file or `--trace-level`
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use reactor_explorer::observability::init_tracing;
//! use reactor_explorer::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("explorer started");
//! ```

mod file_writer;
mod init;
mod otlp;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
