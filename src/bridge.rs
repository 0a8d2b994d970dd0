//! The bridge session: one outbound command interface plus one inbound
//! event router, bound to a single transport. Construct one per process and
//! hand it to the media binder and the store bridge; tests may run several
//! independent instances.

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::{self, JoinHandle};

use crate::commands::{Commands, SendErrorHook};
use crate::events::{Event, EventRouter};
use crate::message::{Envelope, CHANNEL_TAG};
use crate::transport::Transport;

pub struct Bridge {
    commands: Commands,
    router: Arc<EventRouter>,
}

impl Bridge {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            commands: Commands::new(transport),
            router: Arc::new(EventRouter::new()),
        }
    }

    /// Bridge whose fire-and-forget send failures are reported to `hook`.
    #[must_use]
    pub fn with_send_error_hook(transport: Arc<dyn Transport>, hook: SendErrorHook) -> Self {
        Self {
            commands: Commands::with_send_error_hook(transport, Some(hook)),
            router: Arc::new(EventRouter::new()),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    #[must_use]
    pub fn router(&self) -> &Arc<EventRouter> {
        &self.router
    }

    /// Spawn the single inbound listener for this session. Messages reach
    /// the router in arrival order; envelopes on foreign channels are
    /// ignored. The task ends when the sending side closes.
    pub fn start_inbound(&self, mut receiver: mpsc::UnboundedReceiver<Envelope>) -> JoinHandle<()> {
        let router = Arc::clone(&self.router);
        task::spawn(async move {
            while let Some(envelope) = receiver.recv().await {
                if envelope.channel != CHANNEL_TAG {
                    debug!("Ignoring message on foreign channel '{}'", envelope.channel);
                    continue;
                }
                let message = envelope.message;
                debug!("<- {} {:?} {:?}", message.kind, message.id, message.args);
                router.dispatch(&Event::from(message));
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::transport::ChannelTransport;
    use serde_json::json;
    use std::sync::Mutex;

    fn bridge() -> (Bridge, mpsc::UnboundedReceiver<Envelope>) {
        let (transport, outbound) = ChannelTransport::new();
        (Bridge::new(Arc::new(transport)), outbound)
    }

    #[tokio::test]
    async fn inbound_messages_reach_handlers_in_arrival_order() {
        let (bridge, _outbound) = bridge();
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            bridge.router().on("seek", move |event| {
                seen.lock().unwrap().push(event.args[0].clone());
            });
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let pump = bridge.start_inbound(rx);
        for position in [1, 2, 3] {
            tx.send(Envelope {
                channel: CHANNEL_TAG.to_string(),
                message: Message::event("seek", 0, vec![json!(position)]),
            })
            .unwrap();
        }
        drop(tx);
        pump.await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![json!(1), json!(2), json!(3)]);
    }

    #[tokio::test]
    async fn foreign_channels_and_unknown_kinds_are_ignored() {
        let (bridge, _outbound) = bridge();
        let seen = Arc::new(Mutex::new(0));
        {
            let seen = Arc::clone(&seen);
            bridge.router().on("play", move |_| *seen.lock().unwrap() += 1);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let pump = bridge.start_inbound(rx);
        tx.send(Envelope {
            channel: "OTHER:IPC".to_string(),
            message: Message::event("play", 0, vec![]),
        })
        .unwrap();
        tx.send(Envelope {
            channel: CHANNEL_TAG.to_string(),
            message: Message::event("unknown", 0, vec![]),
        })
        .unwrap();
        tx.send(Envelope {
            channel: CHANNEL_TAG.to_string(),
            message: Message::event("play", 0, vec![]),
        })
        .unwrap();
        drop(tx);
        pump.await.unwrap();

        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
