use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    data::model::{Feedback, Listen, Playlist, TopArtist},
    http::error::ApiError,
};

/// Source of the user's recent listening history.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HomeDataProvider: Send + Sync {
    async fn request_music_data(&self, user_name: &str) -> Result<Vec<Listen>, ApiError>;
}

/// Profile statistics shown by the dashboard and its tabs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DashboardDataProvider: Send + Sync {
    async fn get_listen_count(&self, user_name: &str) -> Result<u64, ApiError>;

    async fn get_followers(&self, user_name: &str) -> Result<Vec<String>, ApiError>;

    async fn get_following(&self, user_name: &str) -> Result<Vec<String>, ApiError>;

    async fn get_top_artists(&self, user_name: &str) -> Result<Vec<TopArtist>, ApiError>;

    async fn get_loved_tracks(&self, user_name: &str) -> Result<Vec<Feedback>, ApiError>;

    async fn get_playlists(&self, user_name: &str) -> Result<Vec<Playlist>, ApiError>;

    async fn get_created_for_playlists(&self, user_name: &str)
    -> Result<Vec<Playlist>, ApiError>;
}

/// Authenticated timeline writes triggered from the listen modals.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TimelineActions: Send + Sync {
    async fn pin_track(&self, token: &str, listen: &Listen, blurb: &str) -> Result<(), ApiError>;

    async fn recommend_personally(
        &self,
        user_name: &str,
        token: &str,
        listen: &Listen,
        users: &[String],
        blurb: &str,
    ) -> Result<(), ApiError>;

    async fn write_review(
        &self,
        user_name: &str,
        token: &str,
        listen: &Listen,
        text: &str,
        rating: Option<u8>,
    ) -> Result<(), ApiError>;
}
