//! Collaborator seams to the rest of the client.
//!
//! Operations never reach into global application state. Every external
//! subsystem a command touches is a trait here, implemented by the embedding
//! client and borrowed into an [`OpContext`](crate::ops::OpContext) for the
//! duration of a single dispatch. Tests substitute recording mocks.

use tabletalk_cmd::CommandRecord;

/// A wire-ready message produced by the client's [`MessageFactory`].
///
/// The engine never inspects the payload; it only hands it to the
/// [`ConnectionManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Encoded message body, in whatever framing the network layer uses.
    pub payload: String,
}

impl ChatMessage {
    /// Wrap an already-encoded payload.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Network boundary: delivers built messages.
///
/// Sends are fire-and-forget from the engine's point of view; delivery
/// status never flows back into a dispatch.
pub trait ConnectionManager {
    /// Send a message to the server.
    fn send_remote(&mut self, msg: &ChatMessage);
    /// Echo a message into the local chat log without a network round-trip.
    fn send_local(&mut self, msg: &ChatMessage);
}

/// Builds wire messages for broadcast-style commands.
pub trait MessageFactory {
    /// The message that wipes the shared chat log.
    fn clear_message(&self) -> ChatMessage;
    /// A choice prompt: who is asking, the prompt text, the option list,
    /// and an optional `@`-mention list restricting who may answer.
    fn choice_message(
        &self,
        username: &str,
        prompt: &str,
        options: &str,
        targets: Option<&str>,
    ) -> ChatMessage;
}

/// The current user's chat session.
pub trait UserSession {
    /// Name the user is chatting under.
    fn username(&self) -> &str;
    /// Set the color applied to subsequent outgoing messages.
    fn set_color(&mut self, color: &str);
    /// Send a normal chat line as the current user.
    fn send_message(&mut self, text: &str);
}

/// Dice subsystem. Receives the parsed roll command wholesale; how dice
/// notation is interpreted (defaults for missing count/modifier) is its
/// business, which is why [`Value::Absent`](tabletalk_cmd::Value::Absent)
/// is preserved rather than flattened to an empty string.
pub trait DiceService {
    /// Resolve and announce a roll.
    fn roll(&mut self, record: &CommandRecord);
}

/// Sprite stage and window control.
pub trait StageControl {
    /// Move the user's sprite to a named location.
    fn move_to(&mut self, location: &str);
    /// Retitle the client window.
    fn set_window_title(&mut self, title: &str);
}
