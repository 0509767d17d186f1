use serde::Deserialize;

use crate::data::model::{Feedback, Listen, Playlist, TopArtist};

#[derive(Debug, Deserialize)]
pub struct Payload<T> {
    pub payload: T,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ListensPayload {
    #[serde(default)]
    pub listens: Vec<Listen>,
}

#[derive(Debug, Deserialize)]
pub struct ListenCountPayload {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct FollowersPage {
    #[serde(default)]
    pub followers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FollowingPage {
    #[serde(default)]
    pub following: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopArtistsPayload {
    #[serde(default)]
    pub artists: Vec<TopArtist>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackPage {
    #[serde(default)]
    pub feedback: Vec<Feedback>,
}

// Playlists come back as JSPF, one `{"playlist": {...}}` wrapper per entry.
#[derive(Debug, Deserialize)]
pub struct PlaylistsPage {
    #[serde(default)]
    pub playlists: Vec<JspfEntry>,
}

#[derive(Debug, Deserialize)]
pub struct JspfEntry {
    pub playlist: Playlist,
}

impl PlaylistsPage {
    pub fn into_playlists(self) -> Vec<Playlist> {
        self.playlists.into_iter().map(|e| e.playlist).collect()
    }
}
