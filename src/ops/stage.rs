//! Stage and window operations: move, refresh, startim.

use tabletalk_cmd::CommandRecord;

use super::{require_str, DispatchError, OpContext, Operation};

/// Title the window takes when the IM pane opens.
const IM_WINDOW_TITLE: &str = "Sonata's Revenge";

/// `/move <location>` — move the user's sprite to a named stage location.
pub struct MoveOp;

impl Operation for MoveOp {
    fn run(&self, ctx: &mut OpContext<'_>, record: &CommandRecord) -> Result<(), DispatchError> {
        ctx.stage.move_to(require_str(record, "location")?);
        Ok(())
    }
}

/// `/refresh` — placeholder kept for client parity; the sprite cache
/// refresh it fronted lives entirely in the UI layer.
pub struct RefreshOp;

impl Operation for RefreshOp {
    fn run(&self, _ctx: &mut OpContext<'_>, _record: &CommandRecord) -> Result<(), DispatchError> {
        Ok(())
    }
}

/// `/startim` — open the instant-message pane by retitling the window.
pub struct StartImOp;

impl Operation for StartImOp {
    fn run(&self, ctx: &mut OpContext<'_>, _record: &CommandRecord) -> Result<(), DispatchError> {
        ctx.stage.set_window_title(IM_WINDOW_TITLE);
        Ok(())
    }
}
