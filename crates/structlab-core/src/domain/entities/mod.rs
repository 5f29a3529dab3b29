//! Domain entities: resolved plans and per-run options.

pub mod options;
pub mod path_plan;

pub use options::{DEFAULT_ALIAS_NAME, ScaffoldOptions};
pub use path_plan::{HeaderPair, Layout, PathPlan};
