//! tabletalk - interactive console for the Tabletalk command engine.
//!
//! Plays the role of the client's chat-input layer: reads lines from stdin,
//! strips the `/` prefix, splits the command name from its argument text,
//! and dispatches. Everything that is not a command is echoed back as plain
//! chat, exactly as the chat log would show it.

use std::io::{self, BufRead};

use tabletalk::config::Config;
use tabletalk::ops::{OpContext, Outcome, Registry};
use tabletalk::services::{
    ChatMessage, ConnectionManager, DiceService, MessageFactory, StageControl, UserSession,
};
use tabletalk_cmd::CommandRecord;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Console stand-in for the network layer: prints instead of sending.
struct ConsoleLink;

impl ConnectionManager for ConsoleLink {
    fn send_remote(&mut self, msg: &ChatMessage) {
        println!("[net] {}", msg.payload);
    }

    fn send_local(&mut self, msg: &ChatMessage) {
        println!("[log] {}", msg.payload);
    }
}

/// Builds plain-text payloads in place of the client's wire format.
struct ConsoleFactory;

impl MessageFactory for ConsoleFactory {
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
        let audience = targets.unwrap_or("everyone");
        ChatMessage::new(format!("CHOICE {username} asks {audience}: {prompt} [{options}]"))
    }
}

struct ConsoleSession {
    username: String,
    color: String,
}

impl UserSession for ConsoleSession {
    fn username(&self) -> &str {
        &self.username
    }

    fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    fn send_message(&mut self, text: &str) {
        println!("<{} ({})> {}", self.username, self.color, text);
    }
}

struct ConsoleDice;

impl DiceService for ConsoleDice {
    fn roll(&mut self, record: &CommandRecord) {
        let count = record.get_str("no_of_dice").filter(|s| !s.is_empty());
        let die = record.get_str("die_type").unwrap_or("d?");
        let modifier = record.get_str("mod").unwrap_or("");
        println!("[dice] rolling {}{die}{modifier}", count.unwrap_or("1"));
    }
}

struct ConsoleStage;

impl StageControl for ConsoleStage {
    fn move_to(&mut self, location: &str) {
        println!("[stage] moving to {location}");
    }

    fn set_window_title(&mut self, title: &str) {
        println!("[stage] window title: {title}");
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration; a missing file just means no shortcuts.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tabletalk.toml".to_string());
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %config_path, error = %e, "No usable config, continuing without shortcuts");
            Config::default()
        }
    };

    let mut registry = Registry::with_builtins()?;
    registry.set_shortcuts(config.shortcuts);
    info!(commands = ?registry.commands(), "Command engine ready");

    let mut connection = ConsoleLink;
    let factory = ConsoleFactory;
    let mut session = ConsoleSession {
        username: "narrator".to_string(),
        color: "normal".to_string(),
    };
    let mut dice = ConsoleDice;
    let mut stage = ConsoleStage;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(rest) = line.strip_prefix('/') else {
            // Not a command: ordinary chat text.
            session.send_message(&line);
            continue;
        };
        let (name, raw) = match rest.split_once(' ') {
            Some((name, raw)) => (name, Some(raw)),
            None => (rest, None),
        };

        let mut ctx = OpContext {
            connection: &mut connection,
            factory: &factory,
            session: &mut session,
            dice: &mut dice,
            stage: &mut stage,
        };
        match registry.dispatch(name, raw, &mut ctx) {
            Ok(Outcome::Dispatched(_)) => {}
            Ok(Outcome::NotACommand) => session.send_message(&line),
            Err(e) => println!("!! {e}"),
        }
    }
    Ok(())
}
