//! Domain layer: project configuration and scaffold planning.
//!
//! Pure data and logic, no I/O. The CLI builds a [`ProjectConfig`] from
//! parsed flags; [`ScaffoldPlan::for_project`] turns it into the ordered
//! list of directories and files that the application layer writes out.

mod config;
mod plan;
pub mod templates;

pub use config::{BinaryName, DEFAULT_VERSION, ProjectConfig};
pub use plan::{FsEntry, ScaffoldPlan};
