//! Broadcast-style operations: clear, color, choice.

use tabletalk_cmd::{CommandRecord, Value};

use super::{require_str, DispatchError, OpContext, Operation};

/// `/clear` — wipe the shared chat log.
///
/// The factory-built clear message goes out twice: once to the server for
/// everyone else, once into the local log so the sender sees the effect
/// without waiting for the echo.
pub struct ClearOp;

impl Operation for ClearOp {
    fn run(&self, ctx: &mut OpContext<'_>, _record: &CommandRecord) -> Result<(), DispatchError> {
        let msg = ctx.factory.clear_message();
        ctx.connection.send_remote(&msg);
        ctx.connection.send_local(&msg);
        Ok(())
    }
}

/// `/color <name> "text"` — send one chat line in a different color.
///
/// The session color is restored to `normal` afterwards; the color applies
/// to this line only.
pub struct ColorOp;

impl Operation for ColorOp {
    fn run(&self, ctx: &mut OpContext<'_>, record: &CommandRecord) -> Result<(), DispatchError> {
        let color = require_str(record, "color")?;
        let text = require_str(record, "text")?;

        ctx.session.set_color(color);
        ctx.session.send_message(text);
        ctx.session.set_color("normal");
        Ok(())
    }
}

/// `/choice [@users] "prompt" "options"` — broadcast a choice prompt.
///
/// The `@`-mention list is optional; when its group did not participate in
/// the match the prompt is open to everyone.
pub struct ChoiceOp;

impl Operation for ChoiceOp {
    fn run(&self, ctx: &mut OpContext<'_>, record: &CommandRecord) -> Result<(), DispatchError> {
        let prompt = require_str(record, "choice_text")?;
        let options = require_str(record, "options")?;
        let targets = record.get("list_of_users").and_then(Value::as_str);

        let msg = ctx
            .factory
            .choice_message(ctx.session.username(), prompt, options, targets);
        ctx.connection.send_remote(&msg);
        ctx.connection.send_local(&msg);
        Ok(())
    }
}
