pub mod serialport;

use crate::error::ResetResult;

/// Levels of the two modem control outputs driving the target's
/// reset circuit. `true` means the line is asserted at the adapter,
/// which pulls the wired pin low on the chip side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineState {
    pub dtr: bool,
    pub rts: bool,
}

pub trait ControlLines {
    /// Read the current DTR/RTS levels
    fn lines(&mut self) -> ResetResult<LineState>;

    /// Drive both DTR/RTS levels in one call
    fn set_lines(&mut self, state: LineState) -> ResetResult<()>;
}
