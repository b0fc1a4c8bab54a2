//! Flag-parsing mini-library.
//!
//! An ordered registry of flag definitions ([`FlagSet`]) plus a parser that
//! turns raw command-line tokens into handler dispatches
//! ([`parser::handle_args`]). Handlers are closures over an explicit context
//! value, so flag side effects flow through a single struct instead of
//! global state.
//!
//! Both `-x` and `--xyz` conventions are accepted uniformly: any number of
//! leading dashes is stripped before lookup. Each definition carries an
//! explicit short form and long form, matched exactly; `n` and `name` can
//! only alias each other because they were registered together.

pub mod parser;
pub mod registry;

pub use parser::{Invocation, ParsedFlag, handle_args};
pub use registry::{FlagDef, FlagSet};
