use flexi_logger::FlexiLoggerError;
use std::io;
use thiserror::Error;
use tokio::sync::mpsc::error::SendError;

#[derive(Error, Debug, Clone)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Logger initialization error: {0}")]
    Logger(String),

    #[error("Channel send error: {0}")]
    Send(String),
}

impl From<io::Error> for BridgeError {
    fn from(error: io::Error) -> Self {
        BridgeError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        BridgeError::Serialization(error.to_string())
    }
}

impl From<FlexiLoggerError> for BridgeError {
    fn from(error: FlexiLoggerError) -> Self {
        BridgeError::Logger(error.to_string())
    }
}

impl<T> From<SendError<T>> for BridgeError {
    fn from(error: SendError<T>) -> Self {
        BridgeError::Send(error.to_string())
    }
}
