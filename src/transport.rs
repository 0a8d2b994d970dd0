//! Transport boundary. The bridge only needs a way to queue one tagged
//! message at a time; ordering and at-most-once delivery are the transport's
//! business.

use log::debug;
use tokio::sync::mpsc;

use crate::error::BridgeError;
use crate::message::{Envelope, Message};

/// An asynchronous, ordered, at-most-once message channel toward the control
/// service. No delivery confirmation is ever reported back.
pub trait Transport: Send + Sync {
    fn send(&self, channel: &str, message: Message) -> Result<(), BridgeError>;
}

/// Transport backed by a tokio channel. The receiving half belongs to
/// whatever carries messages out of process.
pub struct ChannelTransport {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl ChannelTransport {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Transport for ChannelTransport {
    fn send(&self, channel: &str, message: Message) -> Result<(), BridgeError> {
        debug!("-> {} {} {:?}", channel, message.kind, message.args);
        self.tx
            .send(Envelope {
                channel: channel.to_string(),
                message,
            })
            .map_err(BridgeError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::CHANNEL_TAG;
    use serde_json::json;

    #[test]
    fn sends_preserve_call_order() {
        let (transport, mut rx) = ChannelTransport::new();
        transport
            .send(CHANNEL_TAG, Message::command("rate", vec![json!(1.0)]))
            .unwrap();
        transport
            .send(CHANNEL_TAG, Message::command("play", vec![]))
            .unwrap();

        assert_eq!(rx.try_recv().unwrap().message.kind, "rate");
        assert_eq!(rx.try_recv().unwrap().message.kind, "play");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_channel_surfaces_as_send_error() {
        let (transport, rx) = ChannelTransport::new();
        drop(rx);
        let result = transport.send(CHANNEL_TAG, Message::command("pause", vec![]));
        assert!(matches!(result, Err(BridgeError::Send(_))));
    }
}
