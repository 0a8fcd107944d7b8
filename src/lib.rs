pub use sequence::{BootMode, ResetTiming};

use constants::DEFAULT_BAUD_RATE;
use error::ResetResult;
use interface::ControlLines;
use interface::serialport::SerialPortLines;

pub(crate) mod constants;
pub mod error;
pub mod interface;
pub mod sequence;
pub(crate) mod util;

/// Runs the timed RTS/DTR reset sequence against an open line-control
/// interface. The serial handle is owned exclusively for the sequencer's
/// lifetime and released when it is dropped, on every exit path.
pub struct ResetSequencer {
    lines: Box<dyn ControlLines>,
    timing: ResetTiming,
    progress_bar_enable: bool,
}

impl ResetSequencer {
    /// Open `port` at the default line rate
    pub fn open(port: &str) -> ResetResult<Self> {
        Self::open_with_baud(port, DEFAULT_BAUD_RATE)
    }

    /// Open `port` at a specific line rate, for adapters that care
    pub fn open_with_baud(port: &str, baud: u32) -> ResetResult<Self> {
        let lines = SerialPortLines::new(port.to_string(), baud)?;
        Ok(Self::from_interface(Box::new(lines)))
    }

    /// Build a sequencer over an already-open line-control interface
    pub fn from_interface(lines: Box<dyn ControlLines>) -> Self {
        ResetSequencer {
            lines,
            timing: ResetTiming::default(),
            progress_bar_enable: false,
        }
    }

    pub fn progress_bar(&mut self, enable: bool) {
        self.progress_bar_enable = enable;
    }

    pub fn timing(&mut self, timing: ResetTiming) {
        self.timing = timing;
    }

    /// Run the reset sequence, leaving the target booting in `mode`
    pub fn run(&mut self, mode: BootMode) -> ResetResult<()> {
        sequence::run(
            self.lines.as_mut(),
            mode,
            &self.timing,
            self.progress_bar_enable,
        )
    }
}
