pub mod error;
mod payload;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::data::{
    model::{Feedback, Listen, Playlist, TopArtist},
    traits::{DashboardDataProvider, HomeDataProvider, TimelineActions},
};

use self::{
    error::ApiError,
    payload::{
        ErrorBody, FeedbackPage, FollowersPage, FollowingPage, ListenCountPayload, ListensPayload,
        Payload, PlaylistsPage, TopArtistsPayload,
    },
};

pub const DEFAULT_API_URL: &str = "https://api.listenbrainz.org";

const LISTENS_PAGE_SIZE: usize = 25;
const TOP_ARTISTS_COUNT: usize = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ApiService {
    client: Client,
    base_url: Url,
}

impl ApiService {
    pub fn new(base_url: &str) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        build_url(&self.base_url, segments)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let mut url = self.url(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn post_json(&self, segments: &[&str], token: &str, body: &Value) -> Result<(), ApiError> {
        if token.is_empty() {
            return Err(ApiError::MissingToken);
        }

        let url = self.url(segments)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, format!("Token {}", token))
            .json(body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }

        Ok(())
    }
}

fn build_url(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    warn!("ListenBrainz request failed with {}: {}", status, message);

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

fn pin_body(listen: &Listen, blurb: &str) -> Result<Value, ApiError> {
    if listen.recording_msid.is_none() && listen.recording_mbid().is_none() {
        return Err(ApiError::MissingRecordingId);
    }

    Ok(json!({
        "recording_msid": listen.recording_msid,
        "recording_mbid": listen.recording_mbid(),
        "blurb_content": blurb,
    }))
}

fn recommend_body(listen: &Listen, users: &[String], blurb: &str) -> Result<Value, ApiError> {
    if listen.recording_msid.is_none() && listen.recording_mbid().is_none() {
        return Err(ApiError::MissingRecordingId);
    }

    Ok(json!({
        "metadata": {
            "recording_msid": listen.recording_msid,
            "recording_mbid": listen.recording_mbid(),
            "users": users,
            "blurb_content": blurb,
        }
    }))
}

fn review_body(listen: &Listen, text: &str, rating: Option<u8>) -> Result<Value, ApiError> {
    let mbid = listen
        .recording_mbid()
        .ok_or(ApiError::MissingRecordingMbid)?;

    Ok(json!({
        "metadata": {
            "entity_name": listen.track_name(),
            "entity_id": mbid,
            "entity_type": "recording",
            "text": text,
            "language": "en",
            "rating": rating,
        }
    }))
}

#[async_trait]
impl HomeDataProvider for ApiService {
    async fn request_music_data(&self, user_name: &str) -> Result<Vec<Listen>, ApiError> {
        let page: Option<Payload<ListensPayload>> = self
            .get_json(
                &["1", "user", user_name, "listens"],
                &[("count", LISTENS_PAGE_SIZE.to_string())],
            )
            .await?;

        Ok(page.map(|p| p.payload.listens).unwrap_or_default())
    }
}

#[async_trait]
impl DashboardDataProvider for ApiService {
    async fn get_listen_count(&self, user_name: &str) -> Result<u64, ApiError> {
        let page: Option<Payload<ListenCountPayload>> = self
            .get_json(&["1", "user", user_name, "listen-count"], &[])
            .await?;

        Ok(page.map(|p| p.payload.count).unwrap_or_default())
    }

    async fn get_followers(&self, user_name: &str) -> Result<Vec<String>, ApiError> {
        let page: Option<FollowersPage> = self
            .get_json(&["1", "user", user_name, "followers"], &[])
            .await?;

        Ok(page.map(|p| p.followers).unwrap_or_default())
    }

    async fn get_following(&self, user_name: &str) -> Result<Vec<String>, ApiError> {
        let page: Option<FollowingPage> = self
            .get_json(&["1", "user", user_name, "following"], &[])
            .await?;

        Ok(page.map(|p| p.following).unwrap_or_default())
    }

    async fn get_top_artists(&self, user_name: &str) -> Result<Vec<TopArtist>, ApiError> {
        let page: Option<Payload<TopArtistsPayload>> = self
            .get_json(
                &["1", "stats", "user", user_name, "artists"],
                &[
                    ("range", "week".to_string()),
                    ("count", TOP_ARTISTS_COUNT.to_string()),
                ],
            )
            .await?;

        Ok(page.map(|p| p.payload.artists).unwrap_or_default())
    }

    async fn get_loved_tracks(&self, user_name: &str) -> Result<Vec<Feedback>, ApiError> {
        let page: Option<FeedbackPage> = self
            .get_json(
                &["1", "feedback", "user", user_name, "get-feedback"],
                &[("score", "1".to_string()), ("metadata", "true".to_string())],
            )
            .await?;

        Ok(page.map(|p| p.feedback).unwrap_or_default())
    }

    async fn get_playlists(&self, user_name: &str) -> Result<Vec<Playlist>, ApiError> {
        let page: Option<PlaylistsPage> = self
            .get_json(&["1", "user", user_name, "playlists"], &[])
            .await?;

        Ok(page.map(PlaylistsPage::into_playlists).unwrap_or_default())
    }

    async fn get_created_for_playlists(
        &self,
        user_name: &str,
    ) -> Result<Vec<Playlist>, ApiError> {
        let page: Option<PlaylistsPage> = self
            .get_json(&["1", "user", user_name, "playlists", "createdfor"], &[])
            .await?;

        Ok(page.map(PlaylistsPage::into_playlists).unwrap_or_default())
    }
}

#[async_trait]
impl TimelineActions for ApiService {
    async fn pin_track(&self, token: &str, listen: &Listen, blurb: &str) -> Result<(), ApiError> {
        let body = pin_body(listen, blurb)?;
        self.post_json(&["1", "pin"], token, &body).await
    }

    async fn recommend_personally(
        &self,
        user_name: &str,
        token: &str,
        listen: &Listen,
        users: &[String],
        blurb: &str,
    ) -> Result<(), ApiError> {
        let body = recommend_body(listen, users, blurb)?;
        self.post_json(
            &[
                "1",
                "user",
                user_name,
                "timeline-event",
                "create",
                "recommend-personal",
            ],
            token,
            &body,
        )
        .await
    }

    async fn write_review(
        &self,
        user_name: &str,
        token: &str,
        listen: &Listen,
        text: &str,
        rating: Option<u8>,
    ) -> Result<(), ApiError> {
        let body = review_body(listen, text, rating)?;
        self.post_json(
            &["1", "user", user_name, "timeline-event", "create", "review"],
            token,
            &body,
        )
        .await
    }
}
