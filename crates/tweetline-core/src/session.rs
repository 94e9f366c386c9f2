//! Persisted session state.
//!
//! The client persists exactly two keys: the bearer `token` and the UI
//! `theme`. [`SessionStore`] abstracts where they live; [`Session`] gives them
//! types and provides the access guard that gates every protected view.
//!
//! There is no expiry handling. A token is valid until the user logs out, and
//! request failures never clear it.

use std::{
    collections::BTreeMap,
    fmt, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use tweetline_proto::Token;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Errors from the underlying key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("session file I/O: {0}")]
    Io(#[from] io::Error),

    /// The backing file is not a JSON object of strings.
    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors from session checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No token is stored; the user must log in first.
    #[error("not logged in")]
    Unauthenticated,
}

/// String key-value storage for session state.
pub trait SessionStore: Send {
    /// Value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn store(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON file.
///
/// The whole object is rewritten on every change. A missing file reads as an
/// empty store and is created on the first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading existing entries if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&self.entries)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Typed view over a [`SessionStore`].
#[derive(Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persisted token, if any. An empty stored value counts as absent.
    pub fn token(&self) -> Option<Token> {
        self.store.load(TOKEN_KEY).filter(|t| !t.is_empty()).map(Token::new)
    }

    /// Access guard for protected views.
    ///
    /// Fails closed: anything other than a stored token is
    /// [`SessionError::Unauthenticated`].
    pub fn guard(&self) -> Result<Token, SessionError> {
        self.token().ok_or(SessionError::Unauthenticated)
    }

    /// Persist `token` for subsequent requests.
    pub fn set_token(&mut self, token: &Token) -> Result<(), StoreError> {
        self.store.store(TOKEN_KEY, token.as_str())
    }

    /// Remove the token and the theme preference.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(THEME_KEY)
    }

    /// Persisted theme. Unknown values read as the default.
    pub fn theme(&self) -> Theme {
        self.store.load(THEME_KEY).and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    /// Persist the theme preference.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.store.store(THEME_KEY, theme.as_str())
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
