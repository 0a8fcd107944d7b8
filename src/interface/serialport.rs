use tracing::trace;

use super::{ControlLines, LineState};
use crate::constants::SERIAL_TIMEOUT_MS;

use crate::error::{ResetError, ResetResult};

pub type ComPort = String;
pub type BaudRate = u32;

/// Serial port line-control layer
pub(crate) struct SerialPortLines {
    pub serial_port: Box<dyn serialport::SerialPort>,
    // The serialport API has no read-back for the output lines,
    // so mirror the last levels written through set_lines().
    state: LineState,
}

impl SerialPortLines {
    pub fn new(port: ComPort, baud: BaudRate) -> ResetResult<SerialPortLines> {
        let serial_port = serialport::new(port, baud)
            .timeout(std::time::Duration::from_millis(SERIAL_TIMEOUT_MS))
            .dtr_on_open(false)
            .open()
            .map_err(|e| ResetError::DeviceOpen(format!("{:?}", e)))?;

        Ok(SerialPortLines {
            serial_port,
            state: LineState {
                dtr: false,
                rts: false,
            },
        })
    }
}

impl ControlLines for SerialPortLines {
    fn lines(&mut self) -> ResetResult<LineState> {
        Ok(self.state)
    }

    fn set_lines(&mut self, state: LineState) -> ResetResult<()> {
        self.serial_port
            .write_data_terminal_ready(state.dtr)
            .map_err(|e| {
                ResetError::LineControl(format!("Failed to set DTR {}: {:?}", state.dtr, e))
            })?;
        self.serial_port
            .write_request_to_send(state.rts)
            .map_err(|e| {
                ResetError::LineControl(format!("Failed to set RTS {}: {:?}", state.rts, e))
            })?;

        self.state = state;
        trace!("Set lines DTR={} RTS={}", state.dtr, state.rts);
        Ok(())
    }
}
