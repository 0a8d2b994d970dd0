//! Outbound command interface toward the control service.
//!
//! Every known command has a dedicated method, all funnelled through one
//! encode-and-send routine. Names the service grows later can still be sent
//! through [`Commands::handle`] without touching this file.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::warn;
use serde_json::{json, Value};

use crate::error::BridgeError;
use crate::message::{Message, CHANNEL_TAG};
use crate::metadata::Metadata;
use crate::transport::Transport;

/// Observer for transport refusals. Commands are fire-and-forget, so this is
/// the only place a failed send becomes visible.
pub type SendErrorHook = Box<dyn Fn(&str, &BridgeError) + Send + Sync>;

struct SenderCore {
    transport: Arc<dyn Transport>,
    on_send_error: Option<SendErrorHook>,
}

impl SenderCore {
    fn send(&self, kind: &str, args: Vec<Value>) {
        let message = Message::command(kind, args);
        if let Err(e) = self.transport.send(CHANNEL_TAG, message) {
            warn!("Failed to send '{kind}' command: {e}");
            if let Some(hook) = &self.on_send_error {
                hook(kind, &e);
            }
        }
    }
}

/// A callable bound to one command name. Invoking it emits exactly one
/// message with that name as the type. The bound name never changes.
pub struct CommandHandle {
    name: String,
    core: Arc<SenderCore>,
}

impl CommandHandle {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, args: Vec<Value>) {
        self.core.send(&self.name, args);
    }
}

/// Session-scoped command dispatcher. Cloning shares the handle cache.
#[derive(Clone)]
pub struct Commands {
    core: Arc<SenderCore>,
    handles: Arc<Mutex<HashMap<String, Arc<CommandHandle>>>>,
}

impl Commands {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_send_error_hook(transport, None)
    }

    #[must_use]
    pub fn with_send_error_hook(
        transport: Arc<dyn Transport>,
        on_send_error: Option<SendErrorHook>,
    ) -> Self {
        Self {
            core: Arc::new(SenderCore {
                transport,
                on_send_error,
            }),
            handles: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Handle for an arbitrary command name, built on first use and cached.
    /// Repeated calls with the same name return the identical instance, so
    /// concurrent first use cannot create duplicate wrappers.
    #[must_use]
    pub fn handle(&self, name: &str) -> Arc<CommandHandle> {
        let mut handles = lock(&self.handles);
        if let Some(handle) = handles.get(name) {
            return Arc::clone(handle);
        }
        let handle = Arc::new(CommandHandle {
            name: name.to_string(),
            core: Arc::clone(&self.core),
        });
        handles.insert(name.to_string(), Arc::clone(&handle));
        handle
    }

    /// Escape hatch for command names without a dedicated method.
    pub fn send_raw(&self, name: &str, args: Vec<Value>) {
        self.handle(name).invoke(args);
    }

    /// Replace the displayed now-playing metadata.
    pub fn metadata(&self, metadata: &Metadata) {
        match serde_json::to_value(metadata) {
            Ok(value) => self.core.send("metadata", vec![value]),
            Err(e) => warn!("Failed to encode metadata: {e}"),
        }
    }

    /// Correct the length field once the real media duration is known.
    pub fn patch_metadata(&self, length_us: i64) {
        self.core
            .send("patchMetadata", vec![json!({ "mpris:length": length_us })]);
    }

    pub fn play(&self) {
        self.core.send("play", Vec::new());
    }

    pub fn pause(&self) {
        self.core.send("pause", Vec::new());
    }

    pub fn rate(&self, rate: f64) {
        self.core.send("rate", vec![json!(rate)]);
    }

    /// Report a completed seek, position in metadata time units.
    pub fn seeked(&self, position_us: i64) {
        self.core.send("seeked", vec![json!(position_us)]);
    }

    /// One-shot readiness notification; inbound commands are meaningful from
    /// here on.
    pub fn renderer_ready(&self) {
        self.core.send("renderer-ready", Vec::new());
    }

    /// Reply to a position query, echoing the caller's correlation id.
    pub fn position_reply(&self, id: i64, position_us: i64) {
        self.core
            .send("getPosition", vec![json!(id), json!(position_us)]);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
