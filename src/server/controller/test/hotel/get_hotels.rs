use super::*;

/// Tests the list envelope returned to anonymous callers.
///
/// Expected: 200 with success, count, pagination and hotels carrying their bookings
#[tokio::test]
async fn returns_list_envelope_with_bookings() {
    let (_test, app, db) = test_app().await;

    let (_, hotel, _) = factory::helpers::create_hotel_with_bookings(&db, 2)
        .await
        .unwrap();

    let reply = send(&app, "GET", "/api/v1/hotels", None, None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["success"], json!(true));
    assert_eq!(reply.body["count"], json!(1));
    assert_eq!(reply.body["pagination"], json!({}));
    assert_eq!(reply.body["data"][0]["id"], json!(hotel.id));
    assert_eq!(reply.body["data"][0]["bookings"].as_array().unwrap().len(), 2);
}

/// Tests filter, projection and paging parameters taken from the query string.
///
/// Expected: only matching hotels, only selected fields plus id and bookings, a next link
#[tokio::test]
async fn applies_query_string() {
    let (_test, app, db) = test_app().await;

    for i in 0..3 {
        factory::hotel::HotelFactory::new(&db)
            .region("North")
            .postal_code(format!("1000{}", i))
            .build()
            .await
            .unwrap();
    }
    factory::hotel::HotelFactory::new(&db)
        .region("South")
        .build()
        .await
        .unwrap();

    let reply = send(
        &app,
        "GET",
        "/api/v1/hotels?region=North&select=name,region&sort=postal_code&limit=2",
        None,
        None,
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["count"], json!(2));
    assert_eq!(reply.body["pagination"]["next"], json!({ "page": 2, "limit": 2 }));
    assert!(reply.body["pagination"].get("prev").is_none());

    let first = reply.body["data"][0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["bookings", "id", "name", "region"]);
    assert_eq!(first["region"], json!("North"));
}

/// Tests that a filter on an unknown field is rejected.
///
/// Expected: 400 with success false
#[tokio::test]
async fn rejects_unknown_field() {
    let (_test, app, _db) = test_app().await;

    let reply = send(&app, "GET", "/api/v1/hotels?password[gt]=a", None, None).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["success"], json!(false));
}
