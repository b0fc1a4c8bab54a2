//! Application layer: orchestration over the filesystem port.
//!
//! No business logic here; the scaffold shape lives in `crate::domain` and
//! all I/O goes through the [`Filesystem`] trait, implemented by the
//! `mkcpp-adapters` crate.

pub mod ports;
pub mod service;

pub use ports::Filesystem;
pub use service::ScaffoldService;
