//! Application services - orchestrate the scaffold use case.
//!
//! The pipeline runs in a fixed order, each stage a hard precondition for
//! the next: stage → personalize → materialize, with unconditional staging
//! cleanup on every exit path.

pub mod materializer;
pub mod personalizer;
pub mod scaffold_service;
pub mod stager;

pub use scaffold_service::{Outcome, ScaffoldService};
