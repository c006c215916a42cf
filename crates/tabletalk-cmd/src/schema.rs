//! The two parsing strategies behind one type.

use crate::error::ParseError;
use crate::pattern::PatternSchema;
use crate::record::CommandRecord;
use crate::typed::TypedSchema;

/// Either parsing strategy, as stored in a command registry.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Fixed-arity positional arguments with per-field coercion.
    Typed(TypedSchema),
    /// Regular expression with ordered named capture groups.
    Pattern(PatternSchema),
}

impl Schema {
    /// The command name this schema parses for.
    pub fn command_name(&self) -> &str {
        match self {
            Self::Typed(s) => s.command_name(),
            Self::Pattern(s) => s.command_name(),
        }
    }

    /// Parse argument text into a [`CommandRecord`].
    pub fn parse(&self, raw: Option<&str>) -> Result<CommandRecord, ParseError> {
        match self {
            Self::Typed(s) => s.parse(raw),
            Self::Pattern(s) => s.parse(raw),
        }
    }
}

impl From<TypedSchema> for Schema {
    fn from(s: TypedSchema) -> Self {
        Self::Typed(s)
    }
}

impl From<PatternSchema> for Schema {
    fn from(s: PatternSchema) -> Self {
        Self::Pattern(s)
    }
}
