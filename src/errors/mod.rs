//! Error types for the analyzer.
//!
//! Scanning itself cannot fail: text with no matches simply yields an
//! empty or partial token stream. The only failure surface is the driver's
//! I/O boundary, modeled here:
//!
//! - Reading a line of input from the console
//! - Flushing rendered output to the console

pub mod errors;
