//! Command operations and the dispatch registry.
//!
//! A command is registered as a schema *and* the operation it runs, bound
//! together at registration time. There is no name-mangled runtime lookup:
//! a schema without an implementation is unrepresentable, so "registered
//! but missing operation" cannot happen at dispatch.

mod dice;
mod messaging;
mod stage;

pub use dice::RollOp;
pub use messaging::{ClearOp, ChoiceOp, ColorOp};
pub use stage::{MoveOp, RefreshOp, StartImOp};

use std::collections::{BTreeMap, HashMap};

use tabletalk_cmd::{CommandRecord, ParseError, PatternSchema, Schema, TypedSchema, Value};
use thiserror::Error;
use tracing::debug;

use crate::services::{ConnectionManager, DiceService, MessageFactory, StageControl, UserSession};

/// Context passed to each operation for the duration of one dispatch.
///
/// Borrows one handle per external subsystem; operations get their
/// collaborators here instead of through ambient application state.
pub struct OpContext<'a> {
    /// Network boundary.
    pub connection: &'a mut dyn ConnectionManager,
    /// Wire-message builders.
    pub factory: &'a dyn MessageFactory,
    /// The current user's chat session.
    pub session: &'a mut dyn UserSession,
    /// Dice subsystem.
    pub dice: &'a mut dyn DiceService,
    /// Sprite stage and window control.
    pub stage: &'a mut dyn StageControl,
}

/// Errors surfaced by a single dispatch attempt.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The argument text failed to parse against the command's schema.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An operation read an argument its own schema does not bind.
    /// Always a programming error: a successful parse binds exactly the
    /// declared names.
    #[error("operation read undeclared argument: {0}")]
    MissingArgument(&'static str),
}

/// Outcome of a dispatch attempt that did not error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The command parsed and its operation ran; the record is returned
    /// for callers that echo or log it.
    Dispatched(CommandRecord),
    /// The name is not a registered command. Not an error: ordinary chat
    /// text shares the same entry point and is simply passed through.
    NotACommand,
}

/// A side-effecting command implementation, bound at registration time.
pub trait Operation {
    /// Execute with the parsed record. Side effects flow through `ctx`;
    /// the dispatcher ignores nothing and retries nothing.
    fn run(&self, ctx: &mut OpContext<'_>, record: &CommandRecord) -> Result<(), DispatchError>;
}

/// Fetch a `Str` argument the operation's schema is known to bind.
pub(crate) fn require_str<'r>(
    record: &'r CommandRecord,
    name: &'static str,
) -> Result<&'r str, DispatchError> {
    record
        .get(name)
        .and_then(Value::as_str)
        .ok_or(DispatchError::MissingArgument(name))
}

struct Entry {
    schema: Schema,
    op: Box<dyn Operation>,
}

/// Registry of command schemas and their bound operations.
///
/// Populated once at startup and read-only afterwards; `register` stays
/// available so an embedding client can add its own commands.
pub struct Registry {
    entries: HashMap<&'static str, Entry>,
    shortcuts: BTreeMap<String, String>,
}

impl Registry {
    /// An empty registry with no shortcuts.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            shortcuts: BTreeMap::new(),
        }
    }

    /// A registry holding the client's built-in command set.
    ///
    /// Pattern compilation happens here, so a broken built-in schema stops
    /// startup instead of surfacing on first use.
    pub fn with_builtins() -> Result<Self, ParseError> {
        let mut registry = Self::new();

        registry.register(
            "roll",
            PatternSchema::new(
                "roll",
                &["no_of_dice", "die_type", "mod"],
                r"(\d*)?\s*(d[\d\w]*)\s*([+-]\s*\d*)?",
            )?
            .into(),
            Box::new(RollOp),
        );
        registry.register("clear", TypedSchema::new("clear").into(), Box::new(ClearOp));
        registry.register(
            "color",
            PatternSchema::new("color", &["color", "text"], r#"([a-z]*)\s*["'](.*)["']$"#)?.into(),
            Box::new(ColorOp),
        );
        registry.register(
            "refresh",
            TypedSchema::new("refresh").into(),
            Box::new(RefreshOp),
        );
        registry.register(
            "choice",
            PatternSchema::new(
                "choice",
                &["list_of_users", "choice_text", "options"],
                r#"(@.*\S)? *"(.*)"\s*"(.*)""#,
            )?
            .into(),
            Box::new(ChoiceOp),
        );
        registry.register(
            "move",
            TypedSchema::with_format("move", "str:location")?.into(),
            Box::new(MoveOp),
        );
        registry.register(
            "startim",
            TypedSchema::new("startim").into(),
            Box::new(StartImOp),
        );

        Ok(registry)
    }

    /// Register (or replace) a command.
    pub fn register(&mut self, name: &'static str, schema: Schema, op: Box<dyn Operation>) {
        self.entries.insert(name, Entry { schema, op });
    }

    /// Install the alias map loaded from configuration.
    pub fn set_shortcuts(&mut self, shortcuts: BTreeMap<String, String>) {
        self.shortcuts = shortcuts;
    }

    /// Registered command names, sorted. For introspection and
    /// autocomplete UIs.
    pub fn commands(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Expand a shortcut alias to its canonical command name.
    /// One lookup, never chained.
    fn resolve<'n>(&'n self, name: &'n str) -> &'n str {
        self.shortcuts.get(name).map_or(name, String::as_str)
    }

    /// Resolve `name`, parse `raw` against its schema, and run the bound
    /// operation.
    ///
    /// Unregistered names yield [`Outcome::NotACommand`] without error.
    /// Parse failures propagate untouched so the caller can show them;
    /// nothing is retried and nothing runs on a failed parse.
    pub fn dispatch(
        &self,
        name: &str,
        raw: Option<&str>,
        ctx: &mut OpContext<'_>,
    ) -> Result<Outcome, DispatchError> {
        let canonical = self.resolve(name);
        let Some(entry) = self.entries.get(canonical) else {
            debug!(name = %canonical, "not a registered command, passing through");
            return Ok(Outcome::NotACommand);
        };

        let record = entry.schema.parse(raw)?;
        debug!(command = %canonical, args = record.len(), "dispatching");
        entry.op.run(ctx, &record)?;
        Ok(Outcome::Dispatched(record))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
