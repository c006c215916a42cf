//! Positional typed command schemas.
//!
//! A typed schema is declared with a format string such as
//! `"int:count str:label"`. Each entry is a `type:name` pair; the number of
//! entries fixes the command's arity. Argument text is split with
//! [`split_args`](crate::split::split_args) using the arity as the field
//! limit, then each field is coerced to its declared type.

use std::fmt;

use tracing::trace;

use crate::error::ParseError;
use crate::record::{CommandRecord, Value};
use crate::split::split_args;

/// Argument types a format string may declare.
///
/// Unknown type names are carried through construction and only rejected
/// when a parse actually consults them, so a bad schema surfaces as a
/// distinct [`ParseError::UnknownType`] on first use rather than a panic
/// at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    /// Pass the field through untouched.
    Str,
    /// Coerce the field as a base-10 `i64`.
    Int,
    /// Coerce the field as an `f64`.
    Float,
    /// A declared type the engine does not support.
    Other(String),
}

impl ArgType {
    fn from_label(label: &str) -> Self {
        match label {
            "str" => Self::Str,
            "int" => Self::Int,
            "float" => Self::Float,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "str"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// Schema for a command with a fixed number of positional, typed arguments.
#[derive(Debug, Clone)]
pub struct TypedSchema {
    name: String,
    fields: Vec<(ArgType, String)>,
}

impl TypedSchema {
    /// A zero-argument command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Build from a `"type1:name1 type2:name2 ..."` format string.
    ///
    /// An entry without a `:` separator is a construction error; an unknown
    /// type label is not (see [`ArgType::Other`]).
    pub fn with_format(name: impl Into<String>, format: &str) -> Result<Self, ParseError> {
        let mut fields = Vec::new();
        for entry in format.split(' ') {
            let (ty, field) = entry.split_once(':').ok_or_else(|| ParseError::SchemaFormat {
                entry: entry.to_string(),
            })?;
            fields.push((ArgType::from_label(ty), field.to_string()));
        }
        Ok(Self {
            name: name.into(),
            fields,
        })
    }

    /// The command name this schema parses for.
    pub fn command_name(&self) -> &str {
        &self.name
    }

    /// Number of declared arguments.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Parse argument text into a [`CommandRecord`].
    ///
    /// A zero-arity schema succeeds for any input, including none at all.
    /// Otherwise absent input is [`ParseError::NoArguments`] and too few
    /// fields is [`ParseError::InvalidArguments`].
    pub fn parse(&self, raw: Option<&str>) -> Result<CommandRecord, ParseError> {
        if self.fields.is_empty() {
            return Ok(CommandRecord::new(&self.name));
        }
        let raw = raw.ok_or(ParseError::NoArguments)?;

        let tokens = split_args(raw, self.fields.len());
        trace!(command = %self.name, arity = self.fields.len(), fields = tokens.len(), "split arguments");
        if tokens.len() < self.fields.len() {
            return Err(ParseError::InvalidArguments);
        }

        let mut args = Vec::with_capacity(self.fields.len());
        for ((ty, name), token) in self.fields.iter().zip(tokens) {
            let value = match ty {
                ArgType::Str => Value::Str(token),
                ArgType::Int => {
                    let n = token.parse::<i64>().map_err(|_| ParseError::Coerce {
                        name: name.clone(),
                        ty: "int",
                        input: token.clone(),
                    })?;
                    Value::Int(n)
                }
                ArgType::Float => {
                    let x = token.parse::<f64>().map_err(|_| ParseError::Coerce {
                        name: name.clone(),
                        ty: "float",
                        input: token.clone(),
                    })?;
                    Value::Float(x)
                }
                ArgType::Other(label) => return Err(ParseError::UnknownType(label.clone())),
            };
            args.push((name.clone(), value));
        }
        Ok(CommandRecord::with_args(&self.name, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arity_ignores_input() {
        let schema = TypedSchema::new("clear");
        assert_eq!(schema.arity(), 0);

        for input in [None, Some(""), Some("whatever trailing junk")] {
            let record = schema.parse(input).unwrap();
            assert_eq!(record.name(), "clear");
            assert!(record.is_empty());
        }
    }

    #[test]
    fn test_positional_coercion() {
        let schema = TypedSchema::with_format("stat", "int:n str:label").unwrap();
        let record = schema.parse(Some("5 hello world")).unwrap();

        assert_eq!(record.get("n"), Some(&Value::Int(5)));
        assert_eq!(record.get_str("label"), Some("hello world"));
    }

    #[test]
    fn test_float_coercion() {
        let schema = TypedSchema::with_format("scale", "float:factor").unwrap();
        let record = schema.parse(Some("1.25")).unwrap();
        assert_eq!(record.get("factor"), Some(&Value::Float(1.25)));
    }

    #[test]
    fn test_quoted_string_argument() {
        let schema = TypedSchema::with_format("say", "str:text").unwrap();
        let record = schema.parse(Some("\"hello there\"")).unwrap();
        assert_eq!(record.get_str("text"), Some("hello there"));
    }

    #[test]
    fn test_coercion_failure_is_user_error() {
        let schema = TypedSchema::with_format("stat", "int:n str:label").unwrap();
        let err = schema.parse(Some("five hp")).unwrap_err();

        assert_eq!(
            err,
            ParseError::Coerce {
                name: "n".into(),
                ty: "int",
                input: "five".into()
            }
        );
        assert!(!err.is_schema_defect());
    }

    #[test]
    fn test_unknown_type_raised_at_parse_not_construction() {
        // Construction carries the bogus type through.
        let schema = TypedSchema::with_format("weird", "weird:x").unwrap();

        // First parse is where it surfaces, as an authoring defect.
        let err = schema.parse(Some("anything")).unwrap_err();
        assert_eq!(err, ParseError::UnknownType("weird".into()));
        assert!(err.is_schema_defect());
    }

    #[test]
    fn test_malformed_format_entry() {
        let err = TypedSchema::with_format("bad", "int:n nocolon").unwrap_err();
        assert_eq!(err, ParseError::SchemaFormat { entry: "nocolon".into() });
    }

    #[test]
    fn test_missing_input_for_positive_arity() {
        let schema = TypedSchema::with_format("move", "str:location").unwrap();
        assert_eq!(schema.parse(None).unwrap_err(), ParseError::NoArguments);
    }

    #[test]
    fn test_too_few_fields() {
        let schema = TypedSchema::with_format("pair", "str:a str:b").unwrap();
        assert_eq!(
            schema.parse(Some("only")).unwrap_err(),
            ParseError::InvalidArguments
        );
    }
}
