//! # tabletalk-cmd
//!
//! Command-argument parsing for the Tabletalk chat client.
//!
//! Chat lines that the client recognizes as commands arrive here as a
//! `(name, argument text)` pair. This crate turns the argument text into a
//! [`CommandRecord`] using one of two declarative strategies:
//!
//! - [`TypedSchema`] — a fixed number of positional arguments described by a
//!   `"type:name type:name ..."` format string, split with quote-aware
//!   tokenization and coerced per field.
//! - [`PatternSchema`] — a regular expression whose capture groups are bound
//!   to argument names in order.
//!
//! The crate is pure: no I/O, no side effects, no knowledge of what a
//! command *does*. Dispatching records to operations lives in the engine
//! crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabletalk_cmd::{Schema, TypedSchema, Value};
//!
//! let schema: Schema = TypedSchema::with_format("stat", "int:n str:label")
//!     .unwrap()
//!     .into();
//! let record = schema.parse(Some("5 hit points")).unwrap();
//!
//! assert_eq!(record.get("n"), Some(&Value::Int(5)));
//! assert_eq!(record.get("label"), Some(&Value::Str("hit points".into())));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod pattern;
pub mod record;
pub mod schema;
pub mod split;
pub mod typed;

pub use error::ParseError;
pub use pattern::PatternSchema;
pub use record::{CommandRecord, Value};
pub use schema::Schema;
pub use split::split_args;
pub use typed::{ArgType, TypedSchema};
