//! structlab Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the structlab
//! project structure generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          structlab-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, AliasService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionControl, Locator)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   structlab-adapters (Infrastructure)   │
//! │ (LocalFilesystem, GitCli, HomeShell...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (ProjectKind, PathPlan, Makefile)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use structlab_core::prelude::*;
//!
//! let service = ScaffoldService::new(Box::new(filesystem), Box::new(vcs));
//! let options = ScaffoldOptions::default().with_header_names(["parser"]);
//! service.create(ProjectKind::C, "./my-c-project", &options)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AliasReport, AliasService, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, ShellConfigLocator, VersionControl},
    };
    pub use crate::domain::{Layout, PathPlan, ProjectKind, ScaffoldOptions, build_recipe};
    pub use crate::error::{StructlabError, StructlabResult};
}
