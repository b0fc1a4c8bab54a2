//! Ordered registry of flag definitions.

use tracing::debug;

use crate::flags::parser::ParsedFlag;

/// Handler invoked when a flag matches.
///
/// Receives the mutable context and the flag's value. `None` means no value
/// was supplied; an empty-string value cannot occur (the parser folds
/// `--flag=` into `--flag`).
pub type Handler<C> = Box<dyn Fn(&mut C, Option<&str>)>;

/// A single registered flag: short form, long form, handler.
pub struct FlagDef<C> {
    short: String,
    long: String,
    handler: Handler<C>,
}

impl<C> FlagDef<C> {
    /// The one-letter (by convention) form, without dashes.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// The full form, without dashes.
    pub fn long(&self) -> &str {
        &self.long
    }

    fn matches(&self, name: &str) -> bool {
        // Exact comparison on both forms. An empty parsed name matches
        // neither form, so tokens of bare dashes fall through to "ignored".
        !name.is_empty() && (name == self.short || name == self.long)
    }
}

impl<C> std::fmt::Debug for FlagDef<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagDef")
            .field("short", &self.short)
            .field("long", &self.long)
            .finish_non_exhaustive()
    }
}

/// Append-only ordered set of flag definitions, generic over the context
/// type `C` that handlers mutate.
///
/// Names are assumed unique by convention, not enforced: registering a
/// duplicate appends a new definition that is shadowed by the earlier one
/// (lookup returns the first match in registration order).
pub struct FlagSet<C> {
    entries: Vec<FlagDef<C>>,
}

impl<C> Default for FlagSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FlagSet<C> {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a definition. No uniqueness check.
    pub fn register(
        &mut self,
        short: impl Into<String>,
        long: impl Into<String>,
        handler: impl Fn(&mut C, Option<&str>) + 'static,
    ) -> &mut Self {
        self.entries.push(FlagDef {
            short: short.into(),
            long: long.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Exact-match lookup: first definition whose short or long form equals
    /// `name` (case-sensitive). `None` when absent.
    pub fn lookup(&self, name: &str) -> Option<&FlagDef<C>> {
        self.entries.iter().find(|def| def.matches(name))
    }

    /// Whether a definition with this long form exists.
    pub fn has_long(&self, long: &str) -> bool {
        self.entries.iter().any(|def| def.long == long)
    }

    /// Register the default `h`/`help` definition unless a `help` long form
    /// is already present. The default handler prints the value it receives
    /// (the usage text, substituted by [`dispatch`](Self::dispatch)).
    pub fn ensure_help(&mut self) -> &mut Self {
        if !self.has_long("help") {
            self.register("h", "help", |_ctx, value| {
                if let Some(text) = value {
                    print!("{text}");
                }
            });
        }
        self
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse one raw token and invoke the matching handler, if any.
    ///
    /// Unmatched tokens are silently ignored; `true` is returned when a
    /// handler ran. When the matched definition's long form is exactly
    /// `help`, the parsed value is discarded and the handler receives
    /// `usage` instead.
    pub fn dispatch(&self, ctx: &mut C, token: &str, usage: &str) -> bool {
        let parsed = ParsedFlag::from_token(token);

        match self.lookup(&parsed.name) {
            Some(def) => {
                let value = if def.long == "help" {
                    Some(usage)
                } else {
                    parsed.value.as_deref()
                };
                (def.handler)(ctx, value);
                true
            }
            None => {
                debug!(token, "ignoring unrecognized flag");
                false
            }
        }
    }
}

impl<C> std::fmt::Debug for FlagSet<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("entries", &self.entries)
            .finish()
    }
}
