use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::clips::domain::UserRecord;
use uuid::Uuid;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub user_name: String,
}

#[derive(Debug, Serialize)]
pub struct UserOutput {
    pub id: Uuid,
    pub user_name: String,
}

impl From<UserRecord> for UserOutput {
    fn from(u: UserRecord) -> Self { Self { id: u.id, user_name: u.user_name } }
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::RegisterUserDoc,
    responses(
        (status = 201, description = "Registered", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "User Exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<UserOutput>), JsonApiError> {
    let user = state.users.register(&input.user_name).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get, path = "/api/users/{user_name}", tag = "users",
    params(("user_name" = String, Path, description = "User name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "User Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(user_name): Path<String>) -> Result<Json<UserOutput>, JsonApiError> {
    let user = state.users.get(&user_name).await?;
    Ok(Json(user.into()))
}
