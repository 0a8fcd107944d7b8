use std::thread;
use std::time::Duration;

use clap::ValueEnum;
use tracing::info;

use crate::constants::{ARM_SETTLE_DELAY_MS, EN_PULSE_DELAY_MS, POST_RESET_BOOTUP_DELAY_MS};
use crate::error::ResetResult;
use crate::interface::ControlLines;
use crate::util::create_progress_bar;

/// Boot configuration the target lands in after the reset pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BootMode {
    /// Boot the user application from flash
    Normal,

    /// Boot the ROM serial bootloader for flashing
    Bootloader,
}

/// Hold times for the three sequence steps. Defaults are the timings
/// the ESP32-S3 auto-reset circuit expects; tests substitute shorter
/// profiles together with a fake line interface.
#[derive(Debug, Clone, Copy)]
pub struct ResetTiming {
    pub arm_settle: Duration,
    pub en_pulse: Duration,
    pub bootup: Duration,
}

impl Default for ResetTiming {
    fn default() -> Self {
        ResetTiming {
            arm_settle: Duration::from_millis(ARM_SETTLE_DELAY_MS),
            en_pulse: Duration::from_millis(EN_PULSE_DELAY_MS),
            bootup: Duration::from_millis(POST_RESET_BOOTUP_DELAY_MS),
        }
    }
}

/// Drive the three-step reset sequence over the control lines.
///
/// DTR is wired through the adapter's auto-reset circuit to EN
/// (asserted = EN low), RTS to GPIO0 (asserted = GPIO0 low). Each step
/// reads the full line state back, changes only its own line(s) and
/// writes the pair in one call, so a level established by an earlier
/// step is never disturbed.
pub(crate) fn run(
    lines: &mut dyn ControlLines,
    mode: BootMode,
    timing: &ResetTiming,
    enable_progress_bar: bool,
) -> ResetResult<()> {
    let pb = enable_progress_bar.then(|| create_progress_bar(3, "Resetting target"));

    info!("Step 1: Setting up reset sequence");
    let mut state = lines.lines()?;
    state.dtr = false;
    state.rts = mode == BootMode::Bootloader;
    lines.set_lines(state)?;
    thread::sleep(timing.arm_settle);
    if let Some(pb) = &pb {
        pb.inc(1);
    }

    info!("Step 2: Pulling EN low to reset");
    let mut state = lines.lines()?;
    state.dtr = true;
    lines.set_lines(state)?;
    thread::sleep(timing.en_pulse);
    if let Some(pb) = &pb {
        pb.inc(1);
    }

    info!("Step 3: Releasing EN to start");
    let mut state = lines.lines()?;
    state.dtr = false;
    lines.set_lines(state)?;
    thread::sleep(timing.bootup);
    if let Some(pb) = &pb {
        pb.inc(1);
        pb.finish_with_message("Reset sequence completed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::interface::LineState;

    struct FakeLines {
        state: LineState,
        writes: Vec<LineState>,
    }

    impl FakeLines {
        fn new(dtr: bool, rts: bool) -> Self {
            FakeLines {
                state: LineState { dtr, rts },
                writes: Vec::new(),
            }
        }
    }

    impl ControlLines for FakeLines {
        fn lines(&mut self) -> ResetResult<LineState> {
            Ok(self.state)
        }

        fn set_lines(&mut self, state: LineState) -> ResetResult<()> {
            self.state = state;
            self.writes.push(state);
            Ok(())
        }
    }

    const FAST: ResetTiming = ResetTiming {
        arm_settle: Duration::ZERO,
        en_pulse: Duration::ZERO,
        bootup: Duration::ZERO,
    };

    fn state(dtr: bool, rts: bool) -> LineState {
        LineState { dtr, rts }
    }

    #[test]
    fn normal_mode_line_sequence() {
        let mut lines = FakeLines::new(false, false);
        run(&mut lines, BootMode::Normal, &FAST, false).unwrap();

        assert_eq!(
            lines.writes,
            vec![state(false, false), state(true, false), state(false, false)]
        );
    }

    #[test]
    fn bootloader_mode_line_sequence() {
        let mut lines = FakeLines::new(false, false);
        run(&mut lines, BootMode::Bootloader, &FAST, false).unwrap();

        assert_eq!(
            lines.writes,
            vec![state(false, true), state(true, true), state(false, true)]
        );
    }

    #[test]
    fn arm_step_overrides_stale_levels() {
        // Adapter left with both lines asserted from a previous session
        let mut lines = FakeLines::new(true, true);
        run(&mut lines, BootMode::Normal, &FAST, false).unwrap();

        assert_eq!(lines.writes[0], state(false, false));
    }

    #[test]
    fn reset_pulse_leaves_boot_select_untouched() {
        let mut lines = FakeLines::new(false, false);
        run(&mut lines, BootMode::Bootloader, &FAST, false).unwrap();

        // GPIO0 strap set in step 1 must survive the EN pulse and release
        assert!(lines.writes.iter().all(|s| s.rts));
        assert_eq!(lines.writes.len(), 3);
    }

    #[test]
    fn sequence_blocks_for_configured_delays() {
        let timing = ResetTiming {
            arm_settle: Duration::from_millis(5),
            en_pulse: Duration::from_millis(10),
            bootup: Duration::from_millis(20),
        };
        let mut lines = FakeLines::new(false, false);

        let start = Instant::now();
        run(&mut lines, BootMode::Normal, &timing, false).unwrap();

        assert!(start.elapsed() >= Duration::from_millis(35));
    }
}
