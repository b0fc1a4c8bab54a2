//! mkcpp Core - scaffolding logic behind the `mkcpp` CLI.
//!
//! This crate provides the flag-parsing mini-library, the project
//! configuration domain, and the scaffolding orchestration for the mkcpp
//! C++ project generator, following a ports-and-adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            mkcpp-cli (CLI)              │
//! │  (registers flags, drives the service)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   flags::{FlagSet, handle_args}         │
//! │   turns raw tokens into handler calls   │
//! └──────────────────┬──────────────────────┘
//!                    │ mutates a context into
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   domain::{ProjectConfig, ScaffoldPlan} │
//! │        pure data, no I/O                │
//! └──────────────────┬──────────────────────┘
//!                    │ written out by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   application::ScaffoldService          │
//! │   over the Filesystem port (trait),     │
//! │   implemented in mkcpp-adapters         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mkcpp_core::{
//!     application::ScaffoldService,
//!     domain::ProjectConfig,
//! };
//!
//! # fn filesystem() -> Box<dyn mkcpp_core::application::Filesystem> { unimplemented!() }
//! let config = ProjectConfig::new("myapp");
//! let service = ScaffoldService::new(filesystem());
//! service.scaffold(&config, std::path::Path::new("."))?;
//! # Ok::<(), mkcpp_core::error::ScaffoldError>(())
//! ```

// Flag registry + parser (the reusable mini-library)
pub mod flags;

// Project configuration and scaffold planning (pure logic)
pub mod domain;

// Orchestration and ports
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Filesystem, ScaffoldService};
    pub use crate::domain::{BinaryName, FsEntry, ProjectConfig, ScaffoldPlan};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
    pub use crate::flags::{FlagSet, Invocation, ParsedFlag, handle_args};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
