use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ClipError;

/// Number of hex digits in the textual form of a [`ClipId`].
pub const CLIP_ID_LEN: usize = 32;

/// Store-assigned clip identifier.
///
/// Rendered as 32 lowercase hex digits; parsing accepts exactly 32 ASCII hex
/// digits in either case and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(Uuid);

impl ClipId {
    /// Fresh random identifier, used by stores when saving a new record.
    pub fn generate() -> Self { Self(Uuid::new_v4()) }

    pub fn as_uuid(&self) -> Uuid { self.0 }

    pub fn parse(raw: &str) -> Result<Self, ClipError> {
        if raw.len() != CLIP_ID_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ClipError::MalformedIdentifier(raw.to_string()));
        }
        Uuid::try_parse(raw)
            .map(Self)
            .map_err(|_| ClipError::MalformedIdentifier(raw.to_string()))
    }
}

impl From<Uuid> for ClipId {
    fn from(id: Uuid) -> Self { Self(id) }
}

impl FromStr for ClipId {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Outcome of a directory or store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool { matches!(self, Lookup::Found(_)) }

    /// Turn absence into the caller's error.
    pub fn found_or_else<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Lookup::Found(v) => Ok(v),
            Lookup::NotFound => Err(err()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(v) => Lookup::Found(f(v)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

/// Domain user (directory view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub user_name: String,
}

/// Persisted clip. `id` is `None` until the store has saved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    pub id: Option<ClipId>,
    pub owner: UserRecord,
    pub content: String,
}

impl ClipRecord {
    /// Unsaved record owned by `owner`.
    pub fn new(owner: UserRecord, content: String) -> Self {
        Self { id: None, owner, content }
    }

    pub fn is_owned_by(&self, user: &UserRecord) -> bool { self.owner.id == user.id }
}

/// Clip as exchanged with callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    pub content: String,
}

impl Clip {
    /// Transfer form of a stored record.
    pub fn from_record(record: &ClipRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_string()),
            user_name: record.owner.user_name.clone(),
            content: record.content.clone(),
        }
    }
}
