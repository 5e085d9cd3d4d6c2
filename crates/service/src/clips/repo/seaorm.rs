use models::errors::ModelError;
use sea_orm::DatabaseConnection;

use crate::clips::domain::{ClipId, ClipRecord, Lookup, UserRecord};
use crate::clips::errors::ClipError;
use crate::clips::repository::{ClipStore, UserDirectory};

fn to_user_record(u: models::user::Model) -> UserRecord {
    UserRecord { id: u.id, user_name: u.user_name }
}

fn to_clip_record(c: models::clip::Model, owner: UserRecord) -> ClipRecord {
    ClipRecord { id: Some(ClipId::from(c.id)), owner, content: c.content }
}

pub struct SeaOrmUserDirectory {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl UserDirectory for SeaOrmUserDirectory {
    async fn find_by_user_name(&self, user_name: &str) -> Result<Lookup<UserRecord>, ClipError> {
        let found = models::user::find_by_user_name(&self.db, user_name).await?;
        Ok(found.map(to_user_record).into())
    }

    async fn create_user(&self, user_name: &str) -> Result<UserRecord, ClipError> {
        match models::user::create(&self.db, user_name).await {
            Ok(created) => Ok(to_user_record(created)),
            Err(ModelError::Conflict(_)) => Err(ClipError::UserExists(user_name.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

pub struct SeaOrmClipStore {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ClipStore for SeaOrmClipStore {
    async fn find_by_owner(&self, owner: &UserRecord) -> Result<Vec<ClipRecord>, ClipError> {
        let rows = models::clip::list_by_user(&self.db, owner.id).await?;
        Ok(rows.into_iter().map(|c| to_clip_record(c, owner.clone())).collect())
    }

    async fn save(&self, record: ClipRecord) -> Result<ClipRecord, ClipError> {
        let row = match record.id {
            None => models::clip::create(&self.db, record.owner.id, &record.content).await?,
            Some(id) => models::clip::update_content(&self.db, id.as_uuid(), &record.content)
                .await?
                .ok_or_else(|| ClipError::ClipNotFound {
                    user_name: record.owner.user_name.clone(),
                    clip_id: id.to_string(),
                })?,
        };
        Ok(to_clip_record(row, record.owner))
    }

    async fn find_by_id(&self, id: ClipId) -> Result<Lookup<ClipRecord>, ClipError> {
        let found: Lookup<_> = models::clip::find_with_owner(&self.db, id.as_uuid()).await?.into();
        Ok(found.map(|(clip, owner)| to_clip_record(clip, to_user_record(owner))))
    }

    async fn delete_by_id(&self, id: ClipId) -> Result<(), ClipError> {
        models::clip::hard_delete(&self.db, id.as_uuid()).await?;
        Ok(())
    }
}
