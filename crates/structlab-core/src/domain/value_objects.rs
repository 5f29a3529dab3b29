//! Domain value objects.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a `Layout` entry in `entities/path_plan.rs`
//! 4. Add the matching `Lang` selector in `structlab-cli`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The layout variant to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    MachineLearning,
    C,
}

impl ProjectKind {
    /// Every kind that has a layout, in display order.
    pub const ALL: [ProjectKind; 2] = [Self::MachineLearning, Self::C];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MachineLearning => "ml",
            Self::C => "c",
        }
    }

    /// Whether scaffolding this kind writes the build recipe.
    pub const fn has_build_recipe(self) -> bool {
        matches!(self, Self::C)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ml" | "machine-learning" | "machinelearning" => Ok(Self::MachineLearning),
            "c" => Ok(Self::C),
            other => Err(DomainError::UnknownProjectKind(other.to_string())),
        }
    }
}
