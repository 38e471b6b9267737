//! Skel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Skel
//! project skeleton generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            skel-cli (CLI)               │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │   Stage → Personalize → Materialize     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Prompt)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     skel-adapters (Infrastructure)      │
//! │  (LocalFilesystem, StdinPrompt, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (ScaffoldRequest, token substitution)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skel_core::{
//!     application::{Outcome, ScaffoldService},
//!     domain::ScaffoldRequest,
//! };
//!
//! // 1. Describe what to scaffold
//! let request = ScaffoldRequest::new(Some("myapp".into()), std::env::current_dir().unwrap());
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, prompt, template_root, staging_root);
//! match service.run(&request).unwrap() {
//!     Outcome::Created => println!("done"),
//!     Outcome::Cancelled => eprintln!("Cancelled"),
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;
