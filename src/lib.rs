//! EduLink admissions service library.
//!
//! The `admissions` module owns the application lifecycle engine, the
//! application store, and the derived-statistics aggregator. The remaining
//! modules provide the runtime scaffolding (configuration, telemetry, and the
//! binary-level error type) shared by the CLI and the HTTP server.

pub mod admissions;
pub mod config;
pub mod error;
pub mod telemetry;
