use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::clips::repository::mock::{InMemoryClipStore, InMemoryUserDirectory};
use service::clips::OwnershipPolicy;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

async fn start_server(users: &[&str], policy: OwnershipPolicy) -> anyhow::Result<TestApp> {
    let state = ServerState::new(
        Arc::new(InMemoryUserDirectory::with_users(users)),
        Arc::new(InMemoryClipStore::default()),
        policy,
    );

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

async fn list_clips(c: &reqwest::Client, app: &TestApp, user: &str) -> anyhow::Result<Vec<Value>> {
    let res = c.get(app.url(&format!("/api/users/{user}/clips"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json::<Vec<Value>>().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(&[], OwnershipPolicy::Enforced).await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_clip_lifecycle() -> anyhow::Result<()> {
    let app = start_server(&["alice"], OwnershipPolicy::Enforced).await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/api/users/alice/clips")).json(&json!({"content": "hello"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let clips = list_clips(&c, &app, "alice").await?;
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0]["content"], "hello");
    assert_eq!(clips[0]["user_name"], "alice");
    let id = clips[0]["id"].as_str().expect("id is a string").to_string();
    assert_eq!(id.len(), 32);

    let res = c.put(app.url(&format!("/api/users/alice/clips/{id}"))).json(&json!({"content": "world"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let clips = list_clips(&c, &app, "alice").await?;
    assert_eq!(clips[0]["content"], "world");
    assert_eq!(clips[0]["id"], id.as_str());

    let res = c.delete(app.url(&format!("/api/users/alice/clips/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(list_clips(&c, &app, "alice").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_errors_are_json_with_codes() -> anyhow::Result<()> {
    let app = start_server(&["alice"], OwnershipPolicy::Enforced).await?;
    let c = reqwest::Client::new();

    let res = c.get(app.url("/api/users/ghost/clips")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], 2001);
    assert_eq!(body["title"], "User Not Found");

    let res = c.put(app.url("/api/users/alice/clips/not-hex")).json(&json!({"content": "x"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["code"], 2003);

    let missing = "0".repeat(32);
    let res = c.put(app.url(&format!("/api/users/alice/clips/{missing}"))).json(&json!({"content": "x"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["code"], 2002);

    let res = c.delete(app.url("/api/users/alice/clips/123")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_register_then_sync() -> anyhow::Result<()> {
    let app = start_server(&[], OwnershipPolicy::Enforced).await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/api/users")).json(&json!({"user_name": "bob"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let user = res.json::<Value>().await?;
    assert_eq!(user["user_name"], "bob");

    let res = c.post(app.url("/api/users")).json(&json!({"user_name": "bob"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c.post(app.url("/api/users")).json(&json!({"user_name": "  "})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.get(app.url("/api/users/bob")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["id"], user["id"]);

    let res = c.post(app.url("/api/users/bob/clips")).json(&json!({"content": "copied"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(list_clips(&c, &app, "bob").await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_ownership_policy_governs_foreign_clips() -> anyhow::Result<()> {
    for (policy, expected) in [
        (OwnershipPolicy::Enforced, HttpStatusCode::NOT_FOUND),
        (OwnershipPolicy::Unchecked, HttpStatusCode::NO_CONTENT),
    ] {
        let app = start_server(&["alice", "bob"], policy).await?;
        let c = reqwest::Client::new();

        c.post(app.url("/api/users/bob/clips")).json(&json!({"content": "bob's"})).send().await?;
        let bob_clips = list_clips(&c, &app, "bob").await?;
        let id = bob_clips[0]["id"].as_str().expect("id").to_string();

        let res = c.put(app.url(&format!("/api/users/alice/clips/{id}"))).json(&json!({"content": "alice was here"})).send().await?;
        assert_eq!(res.status(), expected, "{policy:?}");

        let res = c.delete(app.url(&format!("/api/users/alice/clips/{id}"))).send().await?;
        assert_eq!(res.status(), expected, "{policy:?}");

        let remaining = list_clips(&c, &app, "bob").await?.len();
        assert_eq!(remaining, if policy == OwnershipPolicy::Enforced { 1 } else { 0 });
    }
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_route_is_json_404() -> anyhow::Result<()> {
    let app = start_server(&[], OwnershipPolicy::Enforced).await?;
    let res = reqwest::get(app.url("/api/nothing/here")).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["title"], "Not Found");
    assert_eq!(body["detail"], "no route for /api/nothing/here");
    assert!(body["code"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server(&[], OwnershipPolicy::Enforced).await?;
    let res = reqwest::get(app.url("/api-docs/openapi.json")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/api/users/{user_name}/clips"].is_object());
    Ok(())
}
