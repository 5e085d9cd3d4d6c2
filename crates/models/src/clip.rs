use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter, QueryOrder};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clip")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into() }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, user_id: Uuid, content: &str) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        content: Set(content.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Clips of one user, oldest first.
pub async fn list_by_user(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<Model>, errors::ModelError> {
    let clips = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(clips)
}

/// Clip together with its owner.
pub async fn find_with_owner(db: &DatabaseConnection, id: Uuid) -> Result<Option<(Model, user::Model)>, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .find_also_related(user::Entity)
        .one(db)
        .await?;
    match found {
        Some((clip, Some(owner))) => Ok(Some((clip, owner))),
        Some((clip, None)) => Err(errors::ModelError::Db(format!("clip {} has no owner row", clip.id))),
        None => Ok(None),
    }
}

/// Overwrite the content of an existing clip; `None` when the row is gone.
pub async fn update_content(db: &DatabaseConnection, id: Uuid, content: &str) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = existing.into();
    am.content = Set(content.to_string());
    am.updated_at = Set(Utc::now().into());
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        // deleted between the read and the write
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
