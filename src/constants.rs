pub(crate) const SERIAL_TIMEOUT_MS: u64 = 1000;
pub(crate) const DEFAULT_BAUD_RATE: u32 = 115_200;

pub(crate) const ARM_SETTLE_DELAY_MS: u64 = 50;
pub(crate) const EN_PULSE_DELAY_MS: u64 = 100;
pub(crate) const POST_RESET_BOOTUP_DELAY_MS: u64 = 200;
