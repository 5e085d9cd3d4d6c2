use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::clips::repo::seaorm::{SeaOrmClipStore, SeaOrmUserDirectory};
use service::clips::repository::{ClipStore, UserDirectory};
use service::clips::{ClipService, OwnershipPolicy, UserService};

#[derive(Clone)]
pub struct ServerState {
    pub clips: Arc<ClipService>,
    pub users: Arc<UserService>,
}

impl ServerState {
    /// Wire both services over the same directory and store.
    pub fn new(users: Arc<dyn UserDirectory>, clips: Arc<dyn ClipStore>, policy: OwnershipPolicy) -> Self {
        Self {
            clips: Arc::new(ClipService::with_policy(users.clone(), clips, policy)),
            users: Arc::new(UserService::new(users)),
        }
    }

    /// State backed by the SeaORM repositories.
    pub fn from_db(db: DatabaseConnection, policy: OwnershipPolicy) -> Self {
        Self::new(
            Arc::new(SeaOrmUserDirectory { db: db.clone() }),
            Arc::new(SeaOrmClipStore { db }),
            policy,
        )
    }
}
