/*
[INPUT]:  Public API exports for the albctl crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use commands::{Action, OutputFormat};
pub use config::ControllerConfig;
