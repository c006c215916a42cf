//! Shared mock collaborators for dispatch tests.
//!
//! Every service trait gets a recording mock so tests can assert on the
//! exact side effects an operation produced.

use tabletalk::ops::OpContext;
use tabletalk::services::{
    ChatMessage, ConnectionManager, DiceService, MessageFactory, StageControl, UserSession,
};
use tabletalk_cmd::CommandRecord;

#[derive(Default)]
pub struct MockConnection {
    pub remote: Vec<ChatMessage>,
    pub local: Vec<ChatMessage>,
}

impl ConnectionManager for MockConnection {
    fn send_remote(&mut self, msg: &ChatMessage) {
        self.remote.push(msg.clone());
    }

    fn send_local(&mut self, msg: &ChatMessage) {
        self.local.push(msg.clone());
    }
}

#[derive(Default)]
pub struct MockFactory;

impl MessageFactory for MockFactory {
    fn clear_message(&self) -> ChatMessage {
        ChatMessage::new("CLEAR")
    }

    fn choice_message(
        &self,
        username: &str,
        prompt: &str,
        options: &str,
        targets: Option<&str>,
    ) -> ChatMessage {
        ChatMessage::new(format!(
            "CHOICE|{username}|{prompt}|{options}|{}",
            targets.unwrap_or("*")
        ))
    }
}

pub struct MockSession {
    pub username: String,
    pub color_calls: Vec<String>,
    pub sent: Vec<String>,
}

impl Default for MockSession {
    fn default() -> Self {
        Self {
            username: "alice".to_string(),
            color_calls: Vec::new(),
            sent: Vec::new(),
        }
    }
}

impl UserSession for MockSession {
    fn username(&self) -> &str {
        &self.username
    }

    fn set_color(&mut self, color: &str) {
        self.color_calls.push(color.to_string());
    }

    fn send_message(&mut self, text: &str) {
        self.sent.push(text.to_string());
    }
}

#[derive(Default)]
pub struct MockDice {
    pub rolls: Vec<CommandRecord>,
}

impl DiceService for MockDice {
    fn roll(&mut self, record: &CommandRecord) {
        self.rolls.push(record.clone());
    }
}

#[derive(Default)]
pub struct MockStage {
    pub locations: Vec<String>,
    pub titles: Vec<String>,
}

impl StageControl for MockStage {
    fn move_to(&mut self, location: &str) {
        self.locations.push(location.to_string());
    }

    fn set_window_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}

/// All five mocks plus an [`OpContext`] borrowing them.
#[derive(Default)]
pub struct Harness {
    pub connection: MockConnection,
    pub factory: MockFactory,
    pub session: MockSession,
    pub dice: MockDice,
    pub stage: MockStage,
}

impl Harness {
    pub fn ctx(&mut self) -> OpContext<'_> {
        OpContext {
            connection: &mut self.connection,
            factory: &self.factory,
            session: &mut self.session,
            dice: &mut self.dice,
            stage: &mut self.stage,
        }
    }
}
