use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Clip, ClipId, ClipRecord, Lookup, UserRecord};
use super::errors::ClipError;
use super::repository::{ClipStore, UserDirectory};

/// Whether update/delete may touch clips owned by someone other than the named user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipPolicy {
    /// Foreign clips are reported as `ClipNotFound` and left untouched.
    #[default]
    Enforced,
    /// Clips are addressed by id alone.
    Unchecked,
}

impl OwnershipPolicy {
    pub fn from_enforce_flag(enforce: bool) -> Self {
        if enforce { OwnershipPolicy::Enforced } else { OwnershipPolicy::Unchecked }
    }
}

/// Clip management service independent of web framework and storage.
pub struct ClipService {
    users: Arc<dyn UserDirectory>,
    clips: Arc<dyn ClipStore>,
    policy: OwnershipPolicy,
}

impl ClipService {
    pub fn new(users: Arc<dyn UserDirectory>, clips: Arc<dyn ClipStore>) -> Self {
        Self::with_policy(users, clips, OwnershipPolicy::default())
    }

    pub fn with_policy(users: Arc<dyn UserDirectory>, clips: Arc<dyn ClipStore>, policy: OwnershipPolicy) -> Self {
        Self { users, clips, policy }
    }

    pub fn policy(&self) -> OwnershipPolicy { self.policy }

    async fn require_user(&self, user_name: &str) -> Result<UserRecord, ClipError> {
        self.users
            .find_by_user_name(user_name)
            .await?
            .found_or_else(|| ClipError::UserNotFound(user_name.to_string()))
    }

    fn check_owner(&self, user: &UserRecord, record: &ClipRecord, clip_id: &str) -> Result<(), ClipError> {
        if self.policy == OwnershipPolicy::Enforced && !record.is_owned_by(user) {
            warn!(user_name = %user.user_name, owner = %record.owner.user_name, clip_id, "foreign_clip_rejected");
            return Err(ClipError::ClipNotFound { user_name: user.user_name.clone(), clip_id: clip_id.to_string() });
        }
        Ok(())
    }

    /// List every clip owned by `user_name`, in store order.
    ///
    /// # Examples
    /// ```
    /// use service::clips::{ClipService, domain::Clip};
    /// use service::clips::repository::mock::{InMemoryClipStore, InMemoryUserDirectory};
    /// use std::sync::Arc;
    /// let svc = ClipService::new(
    ///     Arc::new(InMemoryUserDirectory::with_users(&["alice"])),
    ///     Arc::new(InMemoryClipStore::default()),
    /// );
    /// let clip = Clip { id: None, user_name: String::new(), content: "hello".into() };
    /// tokio_test::block_on(svc.add_clip("alice", clip)).unwrap();
    /// let clips = tokio_test::block_on(svc.list_clips("alice")).unwrap();
    /// assert_eq!(clips[0].content, "hello");
    /// assert_eq!(clips[0].user_name, "alice");
    /// ```
    #[instrument(skip(self))]
    pub async fn list_clips(&self, user_name: &str) -> Result<Vec<Clip>, ClipError> {
        let user = self.require_user(user_name).await?;
        let records = self.clips.find_by_owner(&user).await?;
        info!(user_name, count = records.len(), clips = ?records, "user_clips_fetched");
        Ok(records.iter().map(Clip::from_record).collect())
    }

    /// Store `clip.content` as a new clip of `user_name`. Any id or user name on `clip` is ignored.
    #[instrument(skip(self, clip))]
    pub async fn add_clip(&self, user_name: &str, clip: Clip) -> Result<(), ClipError> {
        let user = self.require_user(user_name).await?;
        let saved = self.clips.save(ClipRecord::new(user, clip.content)).await?;
        info!(user_name, record = ?saved, "clip_saved");
        Ok(())
    }

    /// Replace the content of the clip identified by `clip.id`.
    ///
    /// # Examples
    /// ```
    /// use service::clips::{ClipService, ClipError, domain::Clip};
    /// use service::clips::repository::mock::{InMemoryClipStore, InMemoryUserDirectory};
    /// use std::sync::Arc;
    /// let svc = ClipService::new(
    ///     Arc::new(InMemoryUserDirectory::with_users(&["alice"])),
    ///     Arc::new(InMemoryClipStore::default()),
    /// );
    /// let missing = Clip { id: Some("0".repeat(32)), user_name: String::new(), content: "x".into() };
    /// let err = tokio_test::block_on(svc.update_clip("alice", missing)).unwrap_err();
    /// assert!(matches!(err, ClipError::ClipNotFound { .. }));
    /// ```
    #[instrument(skip(self, clip), fields(clip_id = ?clip.id))]
    pub async fn update_clip(&self, user_name: &str, clip: Clip) -> Result<(), ClipError> {
        let user = self.require_user(user_name).await?;
        let raw_id = clip.id.as_deref().unwrap_or_default();
        let id = ClipId::parse(raw_id)?;
        let record = self
            .clips
            .find_by_id(id)
            .await?
            .found_or_else(|| ClipError::ClipNotFound { user_name: user_name.to_string(), clip_id: raw_id.to_string() })?;
        self.check_owner(&user, &record, raw_id)?;

        let updated = ClipRecord { content: clip.content, ..record };
        let saved = self.clips.save(updated).await?;
        info!(clip_id = %id, content = %saved.content, "clip_updated");
        Ok(())
    }

    /// Delete the clip `id`. Unknown ids are a no-op.
    #[instrument(skip(self))]
    pub async fn delete_clip(&self, user_name: &str, id: &str) -> Result<(), ClipError> {
        let user = self.require_user(user_name).await?;
        let clip_id = ClipId::parse(id)?;
        if self.policy == OwnershipPolicy::Enforced {
            if let Lookup::Found(record) = self.clips.find_by_id(clip_id).await? {
                self.check_owner(&user, &record, id)?;
            }
        }
        info!(user_name, clip_id = %clip_id, "deleting_user_clip");
        self.clips.delete_by_id(clip_id).await
    }
}

/// User registration and lookup.
pub struct UserService {
    users: Arc<dyn UserDirectory>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self { Self { users } }

    /// Register a new user name (trimmed).
    ///
    /// # Examples
    /// ```
    /// use service::clips::{UserService, ClipError};
    /// use service::clips::repository::mock::InMemoryUserDirectory;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(InMemoryUserDirectory::default()));
    /// let user = tokio_test::block_on(svc.register(" alice ")).unwrap();
    /// assert_eq!(user.user_name, "alice");
    /// let again = tokio_test::block_on(svc.register("alice")).unwrap_err();
    /// assert!(matches!(again, ClipError::UserExists(_)));
    /// ```
    #[instrument(skip(self))]
    pub async fn register(&self, user_name: &str) -> Result<UserRecord, ClipError> {
        let name = user_name.trim();
        models::user::validate_user_name(name)?;
        if self.users.find_by_user_name(name).await?.is_found() {
            return Err(ClipError::UserExists(name.to_string()));
        }
        let user = self.users.create_user(name).await?;
        info!(user_id = %user.id, user_name = %user.user_name, "user_registered");
        Ok(user)
    }

    pub async fn get(&self, user_name: &str) -> Result<UserRecord, ClipError> {
        self.users
            .find_by_user_name(user_name)
            .await?
            .found_or_else(|| ClipError::UserNotFound(user_name.to_string()))
    }
}
