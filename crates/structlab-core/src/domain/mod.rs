//! Core domain layer for structlab.
//!
//! Pure data and logic with no I/O. Filesystem, subprocess, and shell
//! configuration concerns are reached through the ports defined in
//! `crate::application::ports`.
//!
//! - **Layouts** are static tables keyed by [`ProjectKind`]
//! - **Plans** are resolved fresh per invocation and never persisted
//! - **The build recipe** has exactly one canonical source

pub mod build_recipe;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{DEFAULT_ALIAS_NAME, HeaderPair, Layout, PathPlan, ScaffoldOptions};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::ProjectKind;
