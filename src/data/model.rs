use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listen {
    #[serde(default)]
    pub listened_at: Option<i64>,
    #[serde(default)]
    pub recording_msid: Option<String>,
    pub track_metadata: TrackMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackMetadata {
    pub artist_name: String,
    pub track_name: String,
    #[serde(default)]
    pub release_name: Option<String>,
    #[serde(default)]
    pub mbid_mapping: Option<MbidMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MbidMapping {
    #[serde(default)]
    pub recording_mbid: Option<String>,
    #[serde(default)]
    pub release_mbid: Option<String>,
    #[serde(default)]
    pub artist_mbids: Vec<String>,
}

impl Listen {
    pub fn track_name(&self) -> &str {
        &self.track_metadata.track_name
    }

    pub fn artist_name(&self) -> &str {
        &self.track_metadata.artist_name
    }

    /// Case-insensitive match on track or artist. A blank query matches all.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.track_name().to_lowercase().contains(&query)
            || self.artist_name().to_lowercase().contains(&query)
    }

    pub fn recording_mbid(&self) -> Option<&str> {
        self.track_metadata
            .mbid_mapping
            .as_ref()
            .and_then(|m| m.recording_mbid.as_deref())
    }

    pub fn listened_at(&self) -> Option<DateTime<Local>> {
        self.listened_at
            .and_then(|ts| Local.timestamp_opt(ts, 0).single())
    }

    /// Short label used by the listen list, e.g. "3m ago" or "12 Mar 14:05".
    pub fn listened_at_label(&self, now: DateTime<Local>) -> String {
        let Some(at) = self.listened_at() else {
            return "playing now".to_string();
        };

        let elapsed = now.signed_duration_since(at);
        if elapsed.num_seconds() < 60 {
            "just now".to_string()
        } else if elapsed.num_minutes() < 60 {
            format!("{}m ago", elapsed.num_minutes())
        } else if elapsed.num_hours() < 24 {
            format!("{}h ago", elapsed.num_hours())
        } else {
            at.format("%d %b %H:%M").to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopArtist {
    pub artist_name: String,
    pub listen_count: u64,
    #[serde(default)]
    pub artist_mbid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feedback {
    pub score: i8,
    #[serde(default)]
    pub recording_msid: Option<String>,
    #[serde(default)]
    pub recording_mbid: Option<String>,
    #[serde(default)]
    pub track_metadata: Option<TrackMetadata>,
}

impl Feedback {
    pub fn label(&self) -> String {
        match &self.track_metadata {
            Some(meta) => format!("{} - {}", meta.track_name, meta.artist_name),
            None => self
                .recording_mbid
                .clone()
                .or_else(|| self.recording_msid.clone())
                .unwrap_or_else(|| "Unknown recording".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Playlist {
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
pub(crate) fn sample_listen(track: &str, artist: &str) -> Listen {
    Listen {
        listened_at: Some(1_700_000_000),
        recording_msid: Some(format!("msid-{track}")),
        track_metadata: TrackMetadata {
            artist_name: artist.to_string(),
            track_name: track.to_string(),
            release_name: None,
            mbid_mapping: Some(MbidMapping {
                recording_mbid: Some(format!("mbid-{track}")),
                ..Default::default()
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn listen_deserializes_from_api_shape() {
        let json = r#"{
            "inserted_at": 1700000100,
            "listened_at": 1700000000,
            "recording_msid": "b7ffd2af-418f-4be2-bdd1-22f8b48613da",
            "track_metadata": {
                "artist_name": "Portishead",
                "track_name": "Roads",
                "release_name": "Dummy",
                "additional_info": { "duration_ms": 305000 },
                "mbid_mapping": {
                    "recording_mbid": "e8f9b188-f819-4e43-ab0f-4bd26ce9ff56",
                    "artist_mbids": ["8f6bd1e4-fbe1-4f50-aa9b-94c450ec0f11"]
                }
            },
            "user_name": "rob"
        }"#;

        let listen: Listen = serde_json::from_str(json).unwrap();
        assert_eq!(listen.track_name(), "Roads");
        assert_eq!(listen.artist_name(), "Portishead");
        assert_eq!(
            listen.recording_mbid(),
            Some("e8f9b188-f819-4e43-ab0f-4bd26ce9ff56")
        );
        assert_eq!(listen.track_metadata.release_name.as_deref(), Some("Dummy"));
    }

    #[test]
    fn listen_without_mapping_has_no_mbid() {
        let json = r#"{
            "listened_at": 1700000000,
            "track_metadata": { "artist_name": "A", "track_name": "B" }
        }"#;

        let listen: Listen = serde_json::from_str(json).unwrap();
        assert_eq!(listen.recording_mbid(), None);
        assert_eq!(listen.recording_msid, None);
    }

    #[test]
    fn listened_at_label_is_relative_for_recent_listens() {
        let listen = sample_listen("Song A", "Artist");
        let at = listen.listened_at().unwrap();

        assert_eq!(listen.listened_at_label(at + Duration::seconds(20)), "just now");
        assert_eq!(listen.listened_at_label(at + Duration::minutes(5)), "5m ago");
        assert_eq!(listen.listened_at_label(at + Duration::hours(3)), "3h ago");
        assert_eq!(
            listen.listened_at_label(at + Duration::days(2)),
            at.format("%d %b %H:%M").to_string()
        );
    }

    #[test]
    fn search_matches_track_or_artist_ignoring_case() {
        let listen = sample_listen("Roads", "Portishead");
        assert!(listen.matches(""));
        assert!(listen.matches("  "));
        assert!(listen.matches("road"));
        assert!(listen.matches("PORTIS"));
        assert!(!listen.matches("massive"));
    }

    #[test]
    fn missing_timestamp_means_playing_now() {
        let mut listen = sample_listen("Song A", "Artist");
        listen.listened_at = None;
        assert_eq!(listen.listened_at_label(Local::now()), "playing now");
    }

    #[test]
    fn feedback_label_falls_back_to_ids() {
        let feedback = Feedback {
            score: 1,
            recording_msid: Some("msid".to_string()),
            recording_mbid: None,
            track_metadata: None,
        };
        assert_eq!(feedback.label(), "msid");
    }
}
