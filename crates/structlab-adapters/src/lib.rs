//! Infrastructure adapters for structlab.
//!
//! This crate implements the ports defined in
//! `structlab-core::application::ports`. It contains all I/O: the local
//! filesystem, the `git` subprocess, and shell configuration lookup.

pub mod filesystem;
pub mod shell;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use shell::HomeShellConfig;
pub use vcs::GitCli;
