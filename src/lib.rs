//! Bidirectional bridge between a media-playback front-end and an MPRIS
//! control service.
//!
//! The control service sends playback events (`play`, `pause`, `next`,
//! `prev`, `seek`, `getPosition`, `quit`, `raise`) which the [`events`]
//! router fans out to the media binder and the store bridge; the front-end
//! pushes commands (`metadata`, `patchMetadata`, `play`, `pause`, `rate`,
//! `seeked`, `renderer-ready`) outward through [`commands`]. Both directions
//! travel over one tagged, ordered, at-most-once [`transport`] channel.
//! Outbound commands are fire-and-forget; the transport, the control
//! service, the store and the media element are all external collaborators
//! behind traits.

pub mod bridge;
pub mod commands;
pub mod error;
pub mod events;
pub mod media;
pub mod message;
pub mod metadata;
pub mod store;
pub mod transport;

pub use bridge::Bridge;
pub use commands::Commands;
pub use error::BridgeError;
pub use events::{Event, EventRouter};
pub use media::{HostControl, MediaElement, MediaEvent, PlaybackBinder};
pub use message::{Envelope, Message, CHANNEL_TAG};
pub use metadata::{track_metadata, Metadata, Track};
pub use store::{Mutation, PlaybackStore, StoreAction, StoreBridge};
pub use transport::{ChannelTransport, Transport};
