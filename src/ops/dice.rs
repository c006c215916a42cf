//! Dice-roll forwarding.

use tabletalk_cmd::CommandRecord;
use tracing::debug;

use super::{DispatchError, OpContext, Operation};

/// `/roll [count]d<sides>[+/-mod]` — forwards the parsed roll to the dice
/// subsystem.
///
/// The record goes over wholesale: the dice service owns the defaulting
/// rules for a missing count or modifier, so the engine does not interpret
/// the groups at all.
pub struct RollOp;

impl Operation for RollOp {
    fn run(&self, ctx: &mut OpContext<'_>, record: &CommandRecord) -> Result<(), DispatchError> {
        debug!(die = ?record.get("die_type"), "forwarding roll");
        ctx.dice.roll(record);
        Ok(())
    }
}
