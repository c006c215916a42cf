//! Parsed command records.

use std::fmt;

/// A single coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw text, or a regex capture that participated in the match
    /// (possibly empty).
    Str(String),
    /// A base-10 integer argument.
    Int(i64),
    /// A floating-point argument.
    Float(f64),
    /// An optional regex group that did not participate in the match.
    ///
    /// Distinct from `Str("")`: a dice roll of `d20` has no dice-count
    /// group at all, while `2d6` with an empty modifier group matched
    /// empty text. Downstream defaults depend on the difference.
    Absent,
}

impl Value {
    /// The text of a `Str` value, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer of an `Int` value, `None` otherwise.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The number of a `Float` value, `None` otherwise.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// True for the [`Value::Absent`] variant.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Absent => Ok(()),
        }
    }
}

/// The parsed result of one command: a name plus named arguments.
///
/// Arguments keep their schema declaration order for diagnostics; lookup is
/// by name. Records are immutable once built and value-comparable, so two
/// parses of the same input produce equal records.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    name: String,
    args: Vec<(String, Value)>,
}

impl CommandRecord {
    /// A record with no arguments (zero-arity command).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A record with the given arguments, already in declaration order.
    pub fn with_args(name: impl Into<String>, args: Vec<(String, Value)>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The command name this record was parsed for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an argument by name.
    ///
    /// Arities are tiny (the largest built-in command has three arguments),
    /// so a linear scan beats hashing here.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Look up a string argument by name; `None` for missing or non-`Str`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn args(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.args.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// True when the record carries no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let record = CommandRecord::with_args(
            "stat",
            vec![
                ("n".into(), Value::Int(5)),
                ("label".into(), Value::Str("hit points".into())),
            ],
        );

        assert_eq!(record.name(), "stat");
        assert_eq!(record.get("n"), Some(&Value::Int(5)));
        assert_eq!(record.get_str("label"), Some("hit points"));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let record = CommandRecord::with_args(
            "roll",
            vec![
                ("no_of_dice".into(), Value::Str("2".into())),
                ("die_type".into(), Value::Str("d6".into())),
                ("mod".into(), Value::Absent),
            ],
        );

        let names: Vec<&str> = record.args().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["no_of_dice", "die_type", "mod"]);
    }

    #[test]
    fn test_value_equality() {
        let a = CommandRecord::with_args("x", vec![("f".into(), Value::Float(1.5))]);
        let b = CommandRecord::with_args("x", vec![("f".into(), Value::Float(1.5))]);
        assert_eq!(a, b);

        let c = CommandRecord::with_args("x", vec![("f".into(), Value::Absent)]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Str("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert!(Value::Absent.is_absent());
        assert_eq!(Value::Absent.as_str(), None);
        assert_eq!(Value::Absent.to_string(), "");
    }
}
