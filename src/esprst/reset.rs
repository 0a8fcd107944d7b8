use clap::Parser;
use esprst::{BootMode, ResetSequencer, error::ResetResult};

#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub(crate) struct ResetOptions {
    /// Serial device the target is connected to, e.g. /dev/ttyCH343USB0
    device: String,

    /// Boot mode the target should land in
    #[clap(value_enum)]
    mode: Option<BootMode>,
}

pub(crate) fn handle_reset(opts: ResetOptions) -> ResetResult<()> {
    let mode = opts.mode.unwrap_or(BootMode::Normal);
    match mode {
        BootMode::Bootloader => {
            println!("Resetting ESP32-S3 into bootloader mode via RTS/DTR control...")
        }
        BootMode::Normal => {
            println!("Resetting ESP32-S3 into normal mode via RTS/DTR control...")
        }
    }

    let mut sequencer = ResetSequencer::open(&opts.device)?;
    sequencer.progress_bar(true);
    sequencer.run(mode)?;

    println!("Reset sequence completed!");
    match mode {
        BootMode::Bootloader => println!("Target should now be in bootloader mode for flashing."),
        BootMode::Normal => println!("Target should now be running in normal mode."),
    }

    Ok(())
}
