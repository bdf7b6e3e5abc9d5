//! # Notas Library
//!
//! This library exposes the Notas CLI for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export notas_core for convenience
pub use notas_core;
