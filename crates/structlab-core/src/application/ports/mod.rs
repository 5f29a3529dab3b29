//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `structlab-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `VersionControl`: Repository initialisation
//!   - `ShellConfigLocator`: Which shell configuration file receives aliases
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ShellConfigLocator, VersionControl};

#[cfg(test)]
pub use output::{MockFilesystem, MockShellConfigLocator, MockVersionControl};
