//! Parse-error taxonomy for command schemas.
//!
//! Two families of failure share this enum: user-input errors (the person
//! typing the command got it wrong) and schema-authoring defects (whoever
//! registered the command got it wrong). The presentation layer treats them
//! differently, so [`ParseError::is_schema_defect`] separates them.

use thiserror::Error;

/// Errors produced while building or applying a command schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The command requires argument text and none was supplied.
    #[error("no arguments provided")]
    NoArguments,

    /// The supplied text did not match the command's expected form.
    #[error("invalid arguments")]
    InvalidArguments,

    /// The schema declared a coercion type the engine does not support.
    /// Raised on first parse, not at registration, matching the point where
    /// the declared type is actually consulted.
    #[error("unknown argument type: {0}")]
    UnknownType(String),

    /// A declared `int`/`float` field could not be parsed from the
    /// user-supplied token.
    #[error("invalid {ty} value for argument '{name}': {input:?}")]
    Coerce {
        /// Declared argument name.
        name: String,
        /// Declared type label (`"int"` or `"float"`).
        ty: &'static str,
        /// The token that failed to coerce.
        input: String,
    },

    /// A `type:name` entry in a format string was missing its separator.
    #[error("malformed schema entry: {entry:?}")]
    SchemaFormat {
        /// The offending format-string entry.
        entry: String,
    },

    /// A pattern schema's capture-group count did not match its name list.
    #[error("pattern declares {groups} capture groups but {names} argument names")]
    GroupCountMismatch {
        /// Capture groups in the compiled pattern (group 0 excluded).
        groups: usize,
        /// Argument names supplied alongside the pattern.
        names: usize,
    },

    /// The pattern failed to compile.
    #[error("invalid pattern: {0}")]
    BadPattern(String),
}

impl ParseError {
    /// Get a static error code string for logging and metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoArguments => "no_arguments",
            Self::InvalidArguments => "invalid_arguments",
            Self::UnknownType(_) => "unknown_argument_type",
            Self::Coerce { .. } => "argument_coercion",
            Self::SchemaFormat { .. } => "schema_format",
            Self::GroupCountMismatch { .. } => "group_count_mismatch",
            Self::BadPattern(_) => "bad_pattern",
        }
    }

    /// True when the failure is a schema-authoring defect (a bug in the
    /// registered command) rather than a user typo.
    pub fn is_schema_defect(&self) -> bool {
        matches!(
            self,
            Self::UnknownType(_)
                | Self::SchemaFormat { .. }
                | Self::GroupCountMismatch { .. }
                | Self::BadPattern(_)
        )
    }
}
