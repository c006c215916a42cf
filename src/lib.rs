//! tabletalk - chat-command engine for a tabletop roleplay client.
//!
//! The client hands every recognized command to [`ops::Registry::dispatch`]
//! as a `(name, argument text)` pair. The registry expands user-configured
//! shortcuts, parses the arguments through the schema registered for the
//! command, and runs the operation bound to it. Operations touch the rest
//! of the client only through the trait seams in [`services`].

pub mod config;
pub mod ops;
pub mod services;

pub use config::Config;
pub use ops::{DispatchError, OpContext, Operation, Outcome, Registry};
