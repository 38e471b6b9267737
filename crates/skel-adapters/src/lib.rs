//! Infrastructure adapters for Skel.
//!
//! This crate implements the ports defined in `skel_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_template;
pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{AutoConfirm, ScriptedPrompt, StdinPrompt};
