//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "register an alias".

pub mod alias_service;
pub mod scaffold_service;

pub use alias_service::{AliasReport, AliasService};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
