use super::*;

/// Tests deleting a hotel that has bookings.
///
/// Expected: 200 `{success: true, data: {}}`, then the hotel and its bookings are gone
#[tokio::test]
async fn admin_deletes_hotel_and_bookings() {
    let (_test, app, db) = test_app().await;
    let (cookie, _) = login_as(&app, &db, Role::Admin).await;

    let (_, hotel, _) = factory::helpers::create_hotel_with_bookings(&db, 2)
        .await
        .unwrap();
    let uri = format!("/api/v1/hotels/{}", hotel.id);

    let reply = send(&app, "DELETE", &uri, Some(&cookie), None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!({ "success": true, "data": {} }));

    let reply = send(&app, "GET", &uri, None, None).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);

    let reply = send(&app, "GET", "/api/v1/bookings", Some(&cookie), None).await;
    assert_eq!(reply.body["count"], json!(0));
}

/// Tests deleting the same hotel twice.
///
/// Expected: second call is 400
#[tokio::test]
async fn second_delete_is_bad_request() {
    let (_test, app, db) = test_app().await;
    let (cookie, _) = login_as(&app, &db, Role::Admin).await;

    let hotel = factory::create_hotel(&db).await.unwrap();
    let uri = format!("/api/v1/hotels/{}", hotel.id);

    let first = send(&app, "DELETE", &uri, Some(&cookie), None).await;
    let second = send(&app, "DELETE", &uri, Some(&cookie), None).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["success"], json!(false));
}

/// Tests deleting as a regular user.
///
/// Expected: 403 and the hotel still exists
#[tokio::test]
async fn non_admin_is_forbidden() {
    let (_test, app, db) = test_app().await;
    let (cookie, _) = login_as(&app, &db, Role::User).await;

    let hotel = factory::create_hotel(&db).await.unwrap();
    let uri = format!("/api/v1/hotels/{}", hotel.id);

    let reply = send(&app, "DELETE", &uri, Some(&cookie), None).await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let reply = send(&app, "GET", &uri, None, None).await;
    assert_eq!(reply.status, StatusCode::OK);
}
