use crate::{
    data::model::{Feedback, Listen, Loadable, Playlist, TopArtist},
    event::events::{Event, Request},
};

/// App-wide listening history, shared by every screen.
#[derive(Debug, Clone, Default)]
pub struct HomeViewModel {
    pub listens: Loadable<Vec<Listen>>,
}

impl HomeViewModel {
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::FetchStarted(Request::MusicData) => self.listens = Loadable::Loading,
            Event::MusicDataFetched(listens) => self.listens = Loadable::Loaded(listens.clone()),
            Event::FetchError(Request::MusicData, e) => self.listens = Loadable::Failed(e.clone()),
            _ => {}
        }
    }
}

/// Profile data owned by a single dashboard screen.
#[derive(Debug, Clone, Default)]
pub struct DashboardViewModel {
    pub user_name: String,
    /// Filter applied to the recent listens list.
    pub search_query: String,
    pub listen_count: Loadable<u64>,
    pub followers: Loadable<Vec<String>>,
    pub following: Loadable<Vec<String>>,
    pub top_artists: Loadable<Vec<TopArtist>>,
    pub loved_tracks: Loadable<Vec<Feedback>>,
    pub playlists: Loadable<Vec<Playlist>>,
    pub created_for: Loadable<Vec<Playlist>>,
}

impl DashboardViewModel {
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::FetchStarted(request) => self.set_loading(*request),
            Event::FetchError(request, e) => self.set_failed(*request, e.clone()),
            Event::ListenCountFetched(count) => self.listen_count = Loadable::Loaded(*count),
            Event::FollowersFetched(users) => self.followers = Loadable::Loaded(users.clone()),
            Event::FollowingFetched(users) => self.following = Loadable::Loaded(users.clone()),
            Event::TopArtistsFetched(artists) => {
                self.top_artists = Loadable::Loaded(artists.clone())
            }
            Event::LovedTracksFetched(feedback) => {
                self.loved_tracks = Loadable::Loaded(feedback.clone())
            }
            Event::PlaylistsFetched(playlists) => {
                self.playlists = Loadable::Loaded(playlists.clone())
            }
            Event::CreatedForFetched(playlists) => {
                self.created_for = Loadable::Loaded(playlists.clone())
            }
            _ => {}
        }
    }

    fn set_loading(&mut self, request: Request) {
        match request {
            Request::ListenCount => self.listen_count = Loadable::Loading,
            Request::Followers => self.followers = Loadable::Loading,
            Request::Following => self.following = Loadable::Loading,
            Request::TopArtists => self.top_artists = Loadable::Loading,
            Request::LovedTracks => self.loved_tracks = Loadable::Loading,
            Request::Playlists => self.playlists = Loadable::Loading,
            Request::CreatedFor => self.created_for = Loadable::Loading,
            Request::MusicData => {}
        }
    }

    fn set_failed(&mut self, request: Request, message: String) {
        match request {
            Request::ListenCount => self.listen_count = Loadable::Failed(message),
            Request::Followers => self.followers = Loadable::Failed(message),
            Request::Following => self.following = Loadable::Failed(message),
            Request::TopArtists => self.top_artists = Loadable::Failed(message),
            Request::LovedTracks => self.loved_tracks = Loadable::Failed(message),
            Request::Playlists => self.playlists = Loadable::Failed(message),
            Request::CreatedFor => self.created_for = Loadable::Failed(message),
            Request::MusicData => {}
        }
    }
}
