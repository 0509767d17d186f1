use crate::data::model::{Feedback, Listen, Playlist, TopArtist};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Request {
    MusicData,
    ListenCount,
    Followers,
    Following,
    TopArtists,
    LovedTracks,
    Playlists,
    CreatedFor,
}

impl Request {
    pub fn key(&self) -> &'static str {
        match self {
            Request::MusicData => "music_data",
            Request::ListenCount => "listen_count",
            Request::Followers => "followers",
            Request::Following => "following",
            Request::TopArtists => "top_artists",
            Request::LovedTracks => "loved_tracks",
            Request::Playlists => "playlists",
            Request::CreatedFor => "created_for",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Request::MusicData => "recent listens",
            Request::ListenCount => "listen count",
            Request::Followers => "followers",
            Request::Following => "following",
            Request::TopArtists => "top artists",
            Request::LovedTracks => "loved tracks",
            Request::Playlists => "playlists",
            Request::CreatedFor => "playlists created for you",
        }
    }
}

/// Tags a timeline write so only the modal that sent it reacts to the outcome.
pub type ActionId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Fetches
    FetchStarted(Request),
    MusicDataFetched(Vec<Listen>),
    ListenCountFetched(u64),
    FollowersFetched(Vec<String>),
    FollowingFetched(Vec<String>),
    TopArtistsFetched(Vec<TopArtist>),
    LovedTracksFetched(Vec<Feedback>),
    PlaylistsFetched(Vec<Playlist>),
    CreatedForFetched(Vec<Playlist>),
    FetchError(Request, String),

    // Timeline writes
    ActionCompleted(ActionId, String),
    ActionFailed(ActionId, String),
}
