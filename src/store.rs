//! Wiring between the playback state store and the control service.

use std::sync::Arc;

use crate::bridge::Bridge;
use crate::commands::Commands;
use crate::metadata::{track_metadata, Track};

/// Actions the bridge dispatches back into the playback store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    PlayAudio,
    PauseAudio,
    PlayNextTrack,
    PlayPreviousTrack,
}

/// Store mutations the bridge observes. Only a playing-URL change triggers a
/// metadata push; the rest pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    UpdatePlayingUrl,
    UpdatePlaylist,
    UpdateIndex,
}

/// Boundary to the front-end's playback state store.
pub trait PlaybackStore: Send + Sync {
    fn dispatch(&self, action: StoreAction);
    /// The track at the store's current playlist position, if any.
    fn current_track(&self) -> Option<Track>;
}

pub struct StoreBridge {
    commands: Commands,
    store: Arc<dyn PlaybackStore>,
}

impl StoreBridge {
    /// Subscribe the store to the inbound playback control events.
    pub fn inject(bridge: &Bridge, store: Arc<dyn PlaybackStore>) -> Self {
        let router = bridge.router();
        for (kind, action) in [
            ("play", StoreAction::PlayAudio),
            ("pause", StoreAction::PauseAudio),
            ("next", StoreAction::PlayNextTrack),
            ("prev", StoreAction::PlayPreviousTrack),
        ] {
            let store = Arc::clone(&store);
            router.on(kind, move |_| store.dispatch(action));
        }
        Self {
            commands: bridge.commands().clone(),
            store,
        }
    }

    /// Push fresh metadata whenever the playing URL changes.
    pub fn on_mutation(&self, mutation: Mutation) {
        match mutation {
            Mutation::UpdatePlayingUrl => {
                if let Some(track) = self.store.current_track() {
                    self.commands.metadata(&track_metadata(&track));
                }
            }
            Mutation::UpdatePlaylist | Mutation::UpdateIndex => {}
        }
    }
}
