use super::*;

/// Tests the full session lifecycle starting from registration.
///
/// Expected: register sets a cookie that `/me` accepts, logout ends the session
#[tokio::test]
async fn register_then_me_then_logout() {
    let (_test, app, _db) = test_app().await;

    let reply = send(
        &app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({
            "name": "Alice",
            "email": "Alice@Example.com",
            "password": PASSWORD
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["data"]["email"], json!("alice@example.com"));
    assert_eq!(reply.body["data"]["role"], json!("user"));
    assert!(reply.body["data"].get("password_hash").is_none());
    let cookie = reply.cookie.unwrap();

    let me = send(&app, "GET", "/api/v1/auth/me", Some(&cookie), None).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["name"], json!("Alice"));

    let logout = send(&app, "GET", "/api/v1/auth/logout", Some(&cookie), None).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body, json!({ "success": true, "data": {} }));

    let me = send(&app, "GET", "/api/v1/auth/me", Some(&cookie), None).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

/// Tests registering an email twice.
///
/// Expected: second registration is 400
#[tokio::test]
async fn duplicate_email_is_bad_request() {
    let (_test, app, _db) = test_app().await;
    let body = json!({ "name": "Bob", "email": "bob@example.com", "password": PASSWORD });

    let first = send(&app, "POST", "/api/v1/auth/register", None, Some(body.clone())).await;
    let second = send(&app, "POST", "/api/v1/auth/register", None, Some(body)).await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["success"], json!(false));
}
