//! Token parsing and argument-list handling.

use tracing::debug;

use crate::flags::registry::FlagSet;

/// One parsed token: the flag name (dashes stripped, value split off) and
/// the optional value. Transient, discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFlag {
    pub name: String,
    pub value: Option<String>,
}

impl ParsedFlag {
    /// Parse a raw token.
    ///
    /// Leading `-` characters are stripped, then the token is split at the
    /// first `=`:
    /// - no `=` → the whole stripped token is the name, no value;
    /// - `=` at position 0 → the whole stripped token (including the `=`)
    ///   is the name, no value;
    /// - `=` as the final character → name before it, no value, so
    ///   `--name=` is equivalent to `--name`;
    /// - otherwise → name before the `=`, value after it, verbatim.
    pub fn from_token(token: &str) -> Self {
        let stripped = token.trim_start_matches('-');

        match stripped.find('=') {
            Some(pos) if pos > 0 && pos + 1 < stripped.len() => Self {
                name: stripped[..pos].to_string(),
                value: Some(stripped[pos + 1..].to_string()),
            },
            Some(pos) if pos > 0 => Self {
                // trailing '=': bare flag
                name: stripped[..pos].to_string(),
                value: None,
            },
            _ => Self {
                name: stripped.to_string(),
                value: None,
            },
        }
    }
}

/// How an argument list was interpreted by [`handle_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: the usage text was printed.
    UsageRequested,
    /// The first argument was a flag; it was dispatched and the run should
    /// terminate successfully.
    FlagOnly,
    /// A project name was found; remaining tokens were dispatched.
    Run { project_name: String },
}

/// Drive an argument list (program name already removed) through a flag set.
///
/// - Empty list: print `usage` to stdout, return [`Invocation::UsageRequested`].
/// - First token begins with `-`: dispatch that single token and return
///   [`Invocation::FlagOnly`]. A project name starting with `-` is thereby
///   reinterpreted as a flag; this matches the historical behavior.
/// - Otherwise the first token is the project name and every following token
///   is dispatched in order.
///
/// A default `h`/`help` definition is registered first if absent.
pub fn handle_args<C>(
    args: &[String],
    set: &mut FlagSet<C>,
    ctx: &mut C,
    usage: &str,
) -> Invocation {
    set.ensure_help();

    let Some(first) = args.first() else {
        print!("{usage}");
        return Invocation::UsageRequested;
    };

    if first.starts_with('-') {
        debug!(token = %first, "leading-dash first argument treated as flag");
        set.dispatch(ctx, first, usage);
        return Invocation::FlagOnly;
    }

    for token in &args[1..] {
        set.dispatch(ctx, token, usage);
    }

    Invocation::Run {
        project_name: first.clone(),
    }
}
