use super::*;

/// Tests fetching an existing hotel.
///
/// Expected: 200 with the hotel under `data`
#[tokio::test]
async fn returns_hotel() {
    let (_test, app, db) = test_app().await;

    let hotel = factory::create_hotel(&db).await.unwrap();

    let reply = send(&app, "GET", &format!("/api/v1/hotels/{}", hotel.id), None, None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["success"], json!(true));
    assert_eq!(reply.body["data"]["name"], json!(hotel.name));
}

/// Tests unknown and malformed ids.
///
/// Expected: 400 with a bare failure envelope for both
#[tokio::test]
async fn unknown_or_malformed_id_is_bad_request() {
    let (_test, app, _db) = test_app().await;

    for uri in ["/api/v1/hotels/999", "/api/v1/hotels/not-an-id"] {
        let reply = send(&app, "GET", uri, None, None).await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body, json!({ "success": false }));
    }
}
