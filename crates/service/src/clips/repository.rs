use async_trait::async_trait;

use super::domain::{ClipId, ClipRecord, Lookup, UserRecord};
use super::errors::ClipError;

/// Resolves user names to users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Lookup<UserRecord>, ClipError>;
    /// A taken name is `ClipError::UserExists`.
    async fn create_user(&self, user_name: &str) -> Result<UserRecord, ClipError>;
}

/// Persistence for clip records.
#[async_trait]
pub trait ClipStore: Send + Sync {
    async fn find_by_owner(&self, owner: &UserRecord) -> Result<Vec<ClipRecord>, ClipError>;
    /// Assigns an id when `record.id` is `None`, otherwise overwrites the stored record.
    /// Overwriting a record that no longer exists is `ClipError::ClipNotFound`.
    async fn save(&self, record: ClipRecord) -> Result<ClipRecord, ClipError>;
    async fn find_by_id(&self, id: ClipId) -> Result<Lookup<ClipRecord>, ClipError>;
    async fn delete_by_id(&self, id: ClipId) -> Result<(), ClipError>;
}

/// In-memory repositories for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct InMemoryUserDirectory {
        users: RwLock<HashMap<String, UserRecord>>, // key: user_name
    }

    impl InMemoryUserDirectory {
        pub fn with_users(names: &[&str]) -> Self {
            let users = names
                .iter()
                .map(|n| (n.to_string(), UserRecord { id: Uuid::new_v4(), user_name: n.to_string() }))
                .collect();
            Self { users: RwLock::new(users) }
        }
    }

    #[async_trait]
    impl UserDirectory for InMemoryUserDirectory {
        async fn find_by_user_name(&self, user_name: &str) -> Result<Lookup<UserRecord>, ClipError> {
            let users = self.users.read().await;
            Ok(users.get(user_name).cloned().into())
        }

        async fn create_user(&self, user_name: &str) -> Result<UserRecord, ClipError> {
            let mut users = self.users.write().await;
            if users.contains_key(user_name) {
                return Err(ClipError::UserExists(user_name.to_string()));
            }
            let user = UserRecord { id: Uuid::new_v4(), user_name: user_name.to_string() };
            users.insert(user_name.to_string(), user.clone());
            Ok(user)
        }
    }

    /// Keeps insertion order, which is the listing order.
    #[derive(Default)]
    pub struct InMemoryClipStore {
        clips: RwLock<Vec<ClipRecord>>,
    }

    impl InMemoryClipStore {
        pub async fn len(&self) -> usize { self.clips.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.clips.read().await.is_empty() }

        pub async fn snapshot(&self) -> Vec<ClipRecord> { self.clips.read().await.clone() }
    }

    #[async_trait]
    impl ClipStore for InMemoryClipStore {
        async fn find_by_owner(&self, owner: &UserRecord) -> Result<Vec<ClipRecord>, ClipError> {
            let clips = self.clips.read().await;
            Ok(clips.iter().filter(|c| c.is_owned_by(owner)).cloned().collect())
        }

        async fn save(&self, record: ClipRecord) -> Result<ClipRecord, ClipError> {
            let mut clips = self.clips.write().await;
            match record.id {
                None => {
                    let saved = ClipRecord { id: Some(ClipId::generate()), ..record };
                    clips.push(saved.clone());
                    Ok(saved)
                }
                Some(id) => match clips.iter_mut().find(|c| c.id == Some(id)) {
                    Some(slot) => {
                        *slot = record.clone();
                        Ok(record)
                    }
                    None => Err(ClipError::ClipNotFound { user_name: record.owner.user_name, clip_id: id.to_string() }),
                },
            }
        }

        async fn find_by_id(&self, id: ClipId) -> Result<Lookup<ClipRecord>, ClipError> {
            let clips = self.clips.read().await;
            Ok(clips.iter().find(|c| c.id == Some(id)).cloned().into())
        }

        async fn delete_by_id(&self, id: ClipId) -> Result<(), ClipError> {
            let mut clips = self.clips.write().await;
            clips.retain(|c| c.id != Some(id));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{InMemoryClipStore, InMemoryUserDirectory};
    use super::*;

    #[tokio::test]
    async fn directory_finds_seeded_users_only() {
        let dir = InMemoryUserDirectory::with_users(&["alice"]);
        assert!(dir.find_by_user_name("alice").await.unwrap().is_found());
        assert_eq!(dir.find_by_user_name("bob").await.unwrap(), Lookup::NotFound);
    }

    #[tokio::test]
    async fn directory_rejects_duplicate_user() {
        let dir = InMemoryUserDirectory::default();
        dir.create_user("carol").await.unwrap();
        let err = dir.create_user("carol").await.unwrap_err();
        assert!(matches!(err, ClipError::UserExists(ref n) if n == "carol"));
    }

    #[tokio::test]
    async fn store_assigns_id_then_overwrites_in_place() {
        let dir = InMemoryUserDirectory::with_users(&["alice"]);
        let alice = dir.find_by_user_name("alice").await.unwrap().found_or_else(|| ()).unwrap();
        let store = InMemoryClipStore::default();

        let first = store.save(ClipRecord::new(alice.clone(), "one".into())).await.unwrap();
        let second = store.save(ClipRecord::new(alice.clone(), "two".into())).await.unwrap();
        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);

        store.save(ClipRecord { content: "uno".into(), ..first.clone() }).await.unwrap();
        let listed: Vec<_> = store.find_by_owner(&alice).await.unwrap().into_iter().map(|c| c.content).collect();
        assert_eq!(listed, vec!["uno", "two"]);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn store_delete_of_unknown_id_is_noop() {
        let store = InMemoryClipStore::default();
        store.delete_by_id(ClipId::generate()).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn store_overwrite_of_deleted_clip_is_clip_not_found() {
        let dir = InMemoryUserDirectory::with_users(&["alice"]);
        let alice = dir.find_by_user_name("alice").await.unwrap().found_or_else(|| ()).unwrap();
        let store = InMemoryClipStore::default();

        let saved = store.save(ClipRecord::new(alice, "x".into())).await.unwrap();
        let id = saved.id.unwrap();
        store.delete_by_id(id).await.unwrap();

        let err = store.save(ClipRecord { content: "y".into(), ..saved }).await.unwrap_err();
        assert!(matches!(err, ClipError::ClipNotFound { ref clip_id, .. } if *clip_id == id.to_string()));
        assert!(store.is_empty().await);
    }
}
