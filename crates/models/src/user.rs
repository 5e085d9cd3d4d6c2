use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::clip;

pub const MAX_USER_NAME_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Clip,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Clip => Entity::has_many(clip::Entity).into() }
    }
}

impl Related<clip::Entity> for Entity {
    fn to() -> RelationDef { Relation::Clip.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// User names are path segments in the HTTP API: non-empty, bounded, no whitespace or `/`.
pub fn validate_user_name(user_name: &str) -> Result<(), errors::ModelError> {
    if user_name.is_empty() { return Err(errors::ModelError::Validation("user_name required".into())); }
    if user_name.chars().count() > MAX_USER_NAME_LEN {
        return Err(errors::ModelError::Validation(format!("user_name longer than {MAX_USER_NAME_LEN} characters")));
    }
    if user_name.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(errors::ModelError::Validation("user_name must not contain whitespace or '/'".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, user_name: &str) -> Result<Model, errors::ModelError> {
    validate_user_name(user_name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_name: Set(user_name.to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_user_name(db: &DatabaseConnection, user_name: &str) -> Result<Option<Model>, errors::ModelError> {
    let found = Entity::find()
        .filter(Column::UserName.eq(user_name.to_string()))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
