//! End-to-end demonstration wiring the bridge to an in-process fake control
//! service: outbound commands are logged, and a scripted set of inbound
//! events drives the media element and the store until `quit` arrives.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use flexi_logger::Logger;
use log::info;
use serde_json::json;
use tokio::sync::{mpsc, watch};
use tokio::task;

use mpris_bridge::bridge::Bridge;
use mpris_bridge::error::BridgeError;
use mpris_bridge::media::{HostControl, MediaElement, MediaEvent, PlaybackBinder};
use mpris_bridge::message::{Envelope, Message, CHANNEL_TAG};
use mpris_bridge::metadata::{Album, Artist, Track};
use mpris_bridge::store::{Mutation, PlaybackStore, StoreAction, StoreBridge};
use mpris_bridge::transport::ChannelTransport;

struct DemoElement {
    position: Mutex<f64>,
    duration: f64,
}

impl MediaElement for DemoElement {
    fn position(&self) -> f64 {
        *lock(&self.position)
    }

    fn set_position(&self, secs: f64) {
        *lock(&self.position) = secs;
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

struct DemoStore {
    track: Track,
}

impl PlaybackStore for DemoStore {
    fn dispatch(&self, action: StoreAction) {
        info!("Store action: {action:?}");
    }

    fn current_track(&self) -> Option<Track> {
        Some(self.track.clone())
    }
}

struct DemoHost {
    stop_signal: watch::Sender<()>,
}

impl HostControl for DemoHost {
    fn quit_app(&self) {
        info!("Quit requested by the control service");
        let _ = self.stop_signal.send(());
    }

    fn focus_app(&self) {
        info!("Raise requested by the control service");
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn demo_track() -> Track {
    Track {
        id: Some(1),
        name: Some("Song".to_string()),
        artist_name: Some("Artist".to_string()),
        artists: vec![Artist {
            name: Some("Artist".to_string()),
        }],
        album: Some(Album {
            name: Some("Album".to_string()),
            pic_url: Some("http://x/img.png".to_string()),
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), BridgeError> {
    Logger::try_with_str("debug")?.start()?;

    let (transport, outbound) = ChannelTransport::new();
    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
    let (stop_sender, stop_receiver) = watch::channel(());

    let bridge = Bridge::new(Arc::new(transport));
    let _pump = bridge.start_inbound(inbound_rx);

    start_control_service(outbound, inbound_tx);

    let element = Arc::new(DemoElement {
        position: Mutex::new(0.0),
        duration: 180.5,
    });
    let host = Arc::new(DemoHost {
        stop_signal: stop_sender,
    });
    let binder = PlaybackBinder::bind(&bridge, element, host);
    let store_bridge = StoreBridge::inject(&bridge, Arc::new(DemoStore { track: demo_track() }));

    // The front-end side of the session: a track starts playing.
    store_bridge.on_mutation(Mutation::UpdatePlayingUrl);
    binder.handle_media_event(MediaEvent::DurationChange);
    binder.handle_media_event(MediaEvent::LoadedMetadata);
    binder.handle_media_event(MediaEvent::Playing);

    wait_for_stop_signal(stop_receiver).await;
    info!("Control service asked us to quit, shutting down");
    Ok(())
}

async fn wait_for_stop_signal(mut stop_receiver: watch::Receiver<()>) {
    let _ = stop_receiver.changed().await;
}

/// Fake control service: logs every outbound command and, once the renderer
/// reports ready, plays back a scripted inbound session ending in `quit`.
fn start_control_service(
    mut outbound: mpsc::UnboundedReceiver<Envelope>,
    inbound_tx: mpsc::UnboundedSender<Envelope>,
) {
    task::spawn(async move {
        while let Some(envelope) = outbound.recv().await {
            let message = &envelope.message;
            info!("Control service received: {} {:?}", message.kind, message.args);
            if message.kind == "renderer-ready" {
                for message in [
                    Message::event("play", 0, vec![]),
                    Message::event("getPosition", 1, vec![]),
                    Message::event("seek", 2, vec![json!(45_000_000)]),
                    Message::event("pause", 0, vec![]),
                    Message::event("quit", 0, vec![]),
                ] {
                    let _ = inbound_tx.send(Envelope {
                        channel: CHANNEL_TAG.to_string(),
                        message,
                    });
                }
            }
        }
    });
}
