//! Track record to MPRIS metadata mapping.

use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "未知歌曲";
pub const UNKNOWN_ARTIST: &str = "未知歌手";
pub const UNKNOWN_ALBUM: &str = "未知专辑";
pub const PLACEHOLDER_ART_URL: &str = "file:///dev/null";

/// Sentinel length reported before the element knows the real duration; a
/// `patchMetadata` command corrects it once metadata loads.
pub const DEFAULT_LENGTH_US: i64 = 300_000_000;

/// The slice of the front-end's track model this bridge reads. Everything is
/// optional; the mapper substitutes placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Track {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub artist_name: Option<String>,
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Album {
    pub name: Option<String>,
    pub pic_url: Option<String>,
}

/// MPRIS metadata dictionary. Only these keys are ever emitted; disc and
/// track number, canonical url, use count and user rating exist in the
/// convention but stay unpopulated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Option<i64>,
    #[serde(rename = "mpris:length")]
    pub length: i64,
    #[serde(rename = "mpris:artUrl")]
    pub art_url: String,
    #[serde(rename = "xesam:album")]
    pub album: String,
    #[serde(rename = "xesam:albumArtist")]
    pub album_artist: Vec<String>,
    #[serde(rename = "xesam:artist")]
    pub artist: String,
    #[serde(rename = "xesam:title")]
    pub title: String,
}

/// Map a track record to MPRIS metadata. Pure; never fails; each missing
/// field defaults independently.
#[must_use]
pub fn track_metadata(track: &Track) -> Metadata {
    let album = track.album.as_ref();
    Metadata {
        id: track.id,
        length: DEFAULT_LENGTH_US,
        art_url: album
            .and_then(|a| a.pic_url.clone())
            .unwrap_or_else(|| PLACEHOLDER_ART_URL.to_string()),
        album: album
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        album_artist: track
            .artists
            .iter()
            .map(|artist| {
                artist
                    .name
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
            })
            .collect(),
        artist: track
            .artist_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        title: track.name.clone().unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
    }
}
