//! Regex-based command schemas.
//!
//! Some commands have grammars that positional splitting cannot express
//! (`/roll 2d6+3`, `/color red "text in quotes"`). A pattern schema binds
//! the capture groups of a regular expression to argument names in order.

use regex::Regex;
use tracing::trace;

use crate::error::ParseError;
use crate::record::{CommandRecord, Value};

/// Schema for a command parsed by searching a regular expression.
///
/// The pattern is compiled once at construction. Capture group `i + 1`
/// binds to `arg_names[i]`; group 0 (the whole match) is never bound.
#[derive(Debug, Clone)]
pub struct PatternSchema {
    name: String,
    arg_names: Vec<String>,
    pattern: Regex,
}

impl PatternSchema {
    /// Compile `pattern` and bind its capture groups to `arg_names`.
    ///
    /// Fails at construction (i.e. at registration time) if the pattern
    /// does not compile or its group count disagrees with the name list.
    pub fn new(
        name: impl Into<String>,
        arg_names: &[&str],
        pattern: &str,
    ) -> Result<Self, ParseError> {
        let regex = Regex::new(pattern).map_err(|e| ParseError::BadPattern(e.to_string()))?;
        let groups = regex.captures_len() - 1;
        if groups != arg_names.len() {
            return Err(ParseError::GroupCountMismatch {
                groups,
                names: arg_names.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            arg_names: arg_names.iter().map(|s| s.to_string()).collect(),
            pattern: regex,
        })
    }

    /// The command name this schema parses for.
    pub fn command_name(&self) -> &str {
        &self.name
    }

    /// Parse argument text into a [`CommandRecord`].
    ///
    /// The pattern is searched, not anchored, so it may match anywhere in
    /// the text. An optional group that did not participate in the match
    /// binds [`Value::Absent`]; a group that matched empty text binds
    /// `Str("")`.
    pub fn parse(&self, raw: Option<&str>) -> Result<CommandRecord, ParseError> {
        let raw = raw.ok_or(ParseError::NoArguments)?;
        let caps = self
            .pattern
            .captures(raw)
            .ok_or(ParseError::InvalidArguments)?;
        trace!(command = %self.name, input = raw, "pattern matched");

        let mut args = Vec::with_capacity(self.arg_names.len());
        for (i, arg_name) in self.arg_names.iter().enumerate() {
            let value = match caps.get(i + 1) {
                Some(m) => Value::Str(m.as_str().to_string()),
                None => Value::Absent,
            };
            args.push((arg_name.clone(), value));
        }
        Ok(CommandRecord::with_args(&self.name, args))
    }
}
