use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClipDoc {
    /// 32 lowercase hex digits
    pub id: Option<String>,
    pub user_name: String,
    pub content: String,
}

#[derive(ToSchema)]
pub struct ClipContentDoc { pub content: String }

#[derive(ToSchema)]
pub struct RegisterUserDoc { pub user_name: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: Uuid, pub user_name: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub title: String, pub detail: Option<String>, pub code: Option<u16> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::get,
        crate::routes::clips::list,
        crate::routes::clips::create,
        crate::routes::clips::update,
        crate::routes::clips::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ClipDoc,
            ClipContentDoc,
            RegisterUserDoc,
            UserDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "clips")
    )
)]
pub struct ApiDoc;
