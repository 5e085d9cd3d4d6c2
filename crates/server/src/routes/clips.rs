use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service::clips::domain::Clip;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, Serialize)]
pub struct ClipContentInput {
    pub content: String,
}

#[utoipa::path(
    get, path = "/api/users/{user_name}/clips", tag = "clips",
    params(("user_name" = String, Path, description = "Owner user name")),
    responses(
        (status = 200, description = "Clips of the user", body = [crate::openapi::ClipDoc]),
        (status = 404, description = "User Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>, Path(user_name): Path<String>) -> Result<Json<Vec<Clip>>, JsonApiError> {
    let clips = state.clips.list_clips(&user_name).await?;
    Ok(Json(clips))
}

#[utoipa::path(
    post, path = "/api/users/{user_name}/clips", tag = "clips",
    params(("user_name" = String, Path, description = "Owner user name")),
    request_body = crate::openapi::ClipContentDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 404, description = "User Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(user_name): Path<String>,
    Json(input): Json<ClipContentInput>,
) -> Result<StatusCode, JsonApiError> {
    let clip = Clip { id: None, user_name: user_name.clone(), content: input.content };
    state.clips.add_clip(&user_name, clip).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put, path = "/api/users/{user_name}/clips/{id}", tag = "clips",
    params(
        ("user_name" = String, Path, description = "Owner user name"),
        ("id" = String, Path, description = "Clip id (32 hex digits)")
    ),
    request_body = crate::openapi::ClipContentDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Malformed Identifier", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User or Clip Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path((user_name, id)): Path<(String, String)>,
    Json(input): Json<ClipContentInput>,
) -> Result<StatusCode, JsonApiError> {
    let clip = Clip { id: Some(id), user_name: user_name.clone(), content: input.content };
    state.clips.update_clip(&user_name, clip).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/users/{user_name}/clips/{id}", tag = "clips",
    params(
        ("user_name" = String, Path, description = "Owner user name"),
        ("id" = String, Path, description = "Clip id (32 hex digits)")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed Identifier", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User or Clip Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path((user_name, id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state.clips.delete_clip(&user_name, &id).await?;
    info!(%user_name, %id, "clip delete request served");
    Ok(StatusCode::NO_CONTENT)
}
