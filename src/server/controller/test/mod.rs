//! Request-level tests driving the API router with an in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use entity::user::Role;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory, factory::user::UserFactory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{router::router, state::AppState, util::password::PasswordHasher};


const PASSWORD: &str = "secret123";
const MAX_BOOKINGS: u64 = 3;

/// Response of a single request, split into the parts tests assert on.
struct Reply {
    status: StatusCode,
    cookie: Option<String>,
    body: Value,
}

/// Builds the API router over the test database with a cookie session layer.
async fn app(test: &mut TestContext) -> (Router, DatabaseConnection) {
    let store = test.session_store().await.unwrap();
    let db = test.database().await.unwrap().clone();

    let app = router()
        .0
        .with_state(AppState::new(
            db.clone(),
            PasswordHasher::default(),
            MAX_BOOKINGS,
        ))
        .layer(SessionManagerLayer::new(store).with_secure(false));

    (app, db)
}

async fn test_app() -> (TestContext, Router, DatabaseConnection) {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (app, db) = app(&mut test).await;

    (test, app, db)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Reply {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    Reply {
        status,
        cookie,
        body,
    }
}

/// Inserts an account with a known password and logs it in.
///
/// Returns the session cookie and the user's id.
async fn login_as(app: &Router, db: &DatabaseConnection, role: Role) -> (String, i32) {
    let hash = PasswordHasher::default().hash(PASSWORD).unwrap();
    let user = UserFactory::new(db)
        .role(role)
        .password_hash(hash)
        .build()
        .await
        .unwrap();

    let reply = send(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": user.email, "password": PASSWORD })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);

    (reply.cookie.unwrap(), user.id)
}
