use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResetError {
    #[error("Failed to open serial device: {0}")]
    DeviceOpen(String),

    #[error("Control line error: {0}")]
    LineControl(String),
}

pub type ResetResult<T> = std::result::Result<T, ResetError>;
