//! Core domain layer for Skel.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (copying trees, renaming, prompting) are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: All domain objects are Clone + PartialEq

// Public API - what the world sees
pub mod error;
pub mod request;
pub mod substitution;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use request::ScaffoldRequest;
pub use substitution::{PKG_NAME_TOKEN, PLACEHOLDER_DIR, expand_pkg_name, substitution_targets};
pub use validation::DomainValidator;
