//! Input/output operations, configuration and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Strategy defaults and output naming constants
pub mod configuration;
/// Crate error type
pub mod error;
/// Image decoding and PNG encoding
pub mod image;
/// Terminal progress display
pub mod progress;
