use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::http::DEFAULT_API_URL;

const KEYRING_SERVICE: &str = "lbtui";
const API_URL_ENV: &str = "LISTENBRAINZ_API_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No ListenBrainz user name configured; set {0} or store it in the keyring")]
    MissingUserName(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    UserName,
    UserToken,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::UserName => "userName",
            StorageKey::UserToken => "userToken",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            StorageKey::UserName => "LISTENBRAINZ_USER_NAME",
            StorageKey::UserToken => "LISTENBRAINZ_USER_TOKEN",
        }
    }
}

/// Read-only view over persisted string settings.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Option<String>;
}

pub struct EnvStore;

impl CredentialStore for EnvStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        std::env::var(key.env_var()).ok().filter(|v| !v.is_empty())
    }
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub struct KeyringStore;

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
impl CredentialStore for KeyringStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        let entry = match keyring::Entry::new(KEYRING_SERVICE, key.as_str()) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Keyring unavailable for {}: {}", key.as_str(), e);
                return None;
            }
        };

        match entry.get_password() {
            Ok(value) => Some(value),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!("Failed to read {} from keyring: {}", key.as_str(), e);
                None
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<StorageKey, String>,
}

impl MemoryStore {
    pub fn with(mut self, key: StorageKey, value: &str) -> Self {
        self.values.insert(key, value.to_string());
        self
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(&key).cloned()
    }
}

/// Consults each store in order and returns the first hit.
pub struct LayeredStore {
    layers: Vec<Box<dyn CredentialStore>>,
}

impl LayeredStore {
    pub fn new(layers: Vec<Box<dyn CredentialStore>>) -> Self {
        Self { layers }
    }

    pub fn system() -> Self {
        let layers: Vec<Box<dyn CredentialStore>> = vec![
            Box::new(EnvStore),
            #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
            Box::new(KeyringStore),
        ];
        Self::new(layers)
    }
}

impl CredentialStore for LayeredStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_name: String,
    pub user_token: String,
}

impl Credentials {
    pub fn load(store: &dyn CredentialStore) -> Result<Self, ConfigError> {
        let user_name = store
            .get(StorageKey::UserName)
            .ok_or(ConfigError::MissingUserName(StorageKey::UserName.env_var()))?;
        let user_token = store.get(StorageKey::UserToken).unwrap_or_default();
        if user_token.is_empty() {
            warn!("No user token configured; pinning, recommending and reviewing are disabled");
        }

        Ok(Self {
            user_name,
            user_token,
        })
    }

    pub fn has_token(&self) -> bool {
        !self.user_token.is_empty()
    }

    /// Token with everything but the last four characters hidden.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.user_token.chars().collect();
        if chars.is_empty() {
            return "(not set)".to_string();
        }
        let visible = chars.len().min(4);
        let hidden = chars.len() - visible;
        "•".repeat(hidden) + &chars[hidden..].iter().collect::<String>()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub credentials: Credentials,
}

impl Config {
    pub fn load(store: &dyn CredentialStore) -> Result<Self, ConfigError> {
        let api_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let credentials = Credentials::load(store)?;
        debug!("Loaded config for {} against {}", credentials.user_name, api_url);

        Ok(Self {
            api_url,
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_layers_win() {
        let store = LayeredStore::new(vec![
            Box::new(MemoryStore::default().with(StorageKey::UserName, "env-user")),
            Box::new(
                MemoryStore::default()
                    .with(StorageKey::UserName, "keyring-user")
                    .with(StorageKey::UserToken, "keyring-token"),
            ),
        ]);

        assert_eq!(store.get(StorageKey::UserName).as_deref(), Some("env-user"));
        assert_eq!(
            store.get(StorageKey::UserToken).as_deref(),
            Some("keyring-token")
        );
    }

    #[test]
    fn system_store_has_keyring_only_on_desktop_targets() {
        let expected = if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            2
        } else {
            1
        };
        assert_eq!(LayeredStore::system().layers.len(), expected);
    }

    #[test]
    fn missing_user_name_is_an_error() {
        let store = MemoryStore::default().with(StorageKey::UserToken, "token");
        assert!(matches!(
            Credentials::load(&store),
            Err(ConfigError::MissingUserName("LISTENBRAINZ_USER_NAME"))
        ));
    }

    #[test]
    fn missing_token_is_allowed() {
        let store = MemoryStore::default().with(StorageKey::UserName, "rob");
        let credentials = Credentials::load(&store).unwrap();
        assert_eq!(credentials.user_name, "rob");
        assert!(!credentials.has_token());
        assert_eq!(credentials.masked_token(), "(not set)");
    }

    #[test]
    fn token_is_masked_except_tail() {
        let credentials = Credentials {
            user_name: "rob".into(),
            user_token: "abcdef123456".into(),
        };
        assert_eq!(credentials.masked_token(), "••••••••3456");

        let short = Credentials {
            user_name: "rob".into(),
            user_token: "abc".into(),
        };
        assert_eq!(short.masked_token(), "abc");
    }
}
