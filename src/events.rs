//! Inbound event router: a subscription registry keyed by event kind.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use serde_json::Value;

use crate::message::Message;

/// An inbound notification from the control service.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: String,
    /// Caller-supplied correlation id, opaque to the bridge.
    pub id: i64,
    pub args: Vec<Value>,
}

impl From<Message> for Event {
    fn from(message: Message) -> Self {
        Self {
            kind: message.kind,
            id: message.id.unwrap_or_default(),
            args: message.args,
        }
    }
}

type Handler = Box<dyn Fn(&Event) + Send>;

/// Handlers for a kind fire synchronously in subscription order. Kinds with
/// no subscriber are dropped, not buffered. Registration happens at bind
/// time only; handlers must not subscribe from within a handler.
#[derive(Default)]
pub struct EventRouter {
    handlers: Mutex<HashMap<String, Vec<Handler>>>,
}

impl EventRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&self, kind: &str, handler: F)
    where
        F: Fn(&Event) + Send + 'static,
    {
        let mut handlers = lock(&self.handlers);
        handlers
            .entry(kind.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    pub fn dispatch(&self, event: &Event) {
        let handlers = lock(&self.handlers);
        match handlers.get(&event.kind) {
            Some(subscribed) => {
                for handler in subscribed {
                    handler(event);
                }
            }
            None => debug!("Dropping '{}' event with no subscriber", event.kind),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
