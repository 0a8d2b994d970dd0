//! Wiring between the front-end's media element and the control service.

use std::sync::Arc;

use serde_json::Value;

use crate::bridge::Bridge;
use crate::commands::Commands;
use crate::message::{secs_to_us, US_PER_SEC};

/// Playback surface of the front-end's audio element. Positions and
/// durations are native units: fractional seconds.
pub trait MediaElement: Send + Sync {
    fn position(&self) -> f64;
    fn set_position(&self, secs: f64);
    fn duration(&self) -> f64;
}

/// Host-process requests the control service can trigger.
pub trait HostControl: Send + Sync {
    fn quit_app(&self);
    fn focus_app(&self);
}

/// Media element lifecycle transitions relayed to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    DurationChange,
    LoadedMetadata,
    Seeked,
    Playing,
    Pause,
    Stalled,
}

/// Translates element transitions into outbound commands, and the `seek` /
/// `getPosition` / `quit` / `raise` events into element or host actions.
pub struct PlaybackBinder {
    commands: Commands,
    element: Arc<dyn MediaElement>,
}

impl PlaybackBinder {
    /// Register the inbound handlers, then announce readiness so the control
    /// service starts delivering commands.
    pub fn bind(bridge: &Bridge, element: Arc<dyn MediaElement>, host: Arc<dyn HostControl>) -> Self {
        let router = bridge.router();
        {
            let host = Arc::clone(&host);
            router.on("quit", move |_| host.quit_app());
        }
        {
            let host = Arc::clone(&host);
            router.on("raise", move |_| host.focus_app());
        }
        {
            let commands = bridge.commands().clone();
            let element = Arc::clone(&element);
            router.on("getPosition", move |event| {
                commands.position_reply(event.id, secs_to_us(element.position()));
            });
        }
        {
            let element = Arc::clone(&element);
            router.on("seek", move |event| {
                if let Some(position_us) = event.args.first().and_then(Value::as_f64) {
                    element.set_position(position_us / US_PER_SEC);
                }
            });
        }

        let commands = bridge.commands().clone();
        commands.renderer_ready();
        Self { commands, element }
    }

    /// Relay one media element transition to the control service.
    pub fn handle_media_event(&self, event: MediaEvent) {
        match event {
            // Setting the rate to 0 here would stop the progress display
            // until playback starts, but that does not work on KDE, so
            // report paused instead.
            MediaEvent::DurationChange => self.commands.pause(),
            MediaEvent::LoadedMetadata => self
                .commands
                .patch_metadata(secs_to_us(self.element.duration())),
            MediaEvent::Seeked => self
                .commands
                .seeked(secs_to_us(self.element.position())),
            MediaEvent::Playing => {
                // restore the rate before reporting playback; order matters
                self.commands.rate(1.0);
                self.commands.play();
            }
            MediaEvent::Pause | MediaEvent::Stalled => self.commands.pause(),
        }
    }
}
