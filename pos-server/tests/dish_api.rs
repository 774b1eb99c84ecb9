//! Dish endpoints through the full router

mod common;

use common::spawn_app;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_dish_joins_category() {
    let app = spawn_app().await;
    let category = app.create_category("Starters").await;

    let (status, body) = app
        .post(
            "/dishes",
            json!({
                "name": "Paneer Tikka",
                "description": "Char-grilled cottage cheese",
                "price": 249.5,
                "category": category,
                "image": "https://img.example.com/paneer.jpg"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let dish = &body["data"];
    assert!(dish["_id"].as_str().unwrap().starts_with("dish:"));
    assert_eq!(dish["price"], 249.5);
    assert_eq!(dish["isAvailable"], true);
    assert_eq!(dish["category"]["_id"], category.as_str());
    assert_eq!(dish["category"]["name"], "Starters");
}

#[tokio::test]
async fn list_includes_category_join() {
    let app = spawn_app().await;
    let starters = app.create_category("Starters").await;
    let mains = app.create_category("Mains").await;
    app.create_dish("Samosa", 40.0, &starters).await;
    app.create_dish("Biryani", 320.0, &mains).await;

    let (status, body) = app.get("/dishes").await;
    assert_eq!(status, StatusCode::OK);
    let dishes = body["data"].as_array().unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0]["name"], "Samosa");
    assert_eq!(dishes[0]["category"]["name"], "Starters");
    assert_eq!(dishes[1]["category"]["name"], "Mains");
}

#[tokio::test]
async fn list_by_category_filters() {
    let app = spawn_app().await;
    let starters = app.create_category("Starters").await;
    let mains = app.create_category("Mains").await;
    app.create_dish("Samosa", 40.0, &starters).await;
    app.create_dish("Pakora", 60.0, &starters).await;
    app.create_dish("Biryani", 320.0, &mains).await;

    let (status, body) = app.get(&format!("/dishes/category/{starters}")).await;
    assert_eq!(status, StatusCode::OK);
    let dishes = body["data"].as_array().unwrap();
    assert_eq!(dishes.len(), 2);
    assert!(dishes.iter().all(|d| d["category"]["name"] == "Starters"));

    let bare = mains.strip_prefix("category:").unwrap();
    let (_, body) = app.get(&format!("/dishes/category/{bare}")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_with_unknown_category_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/dishes",
            json!({ "name": "Orphan", "price": 10, "category": "category:missing" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = app.get("/dishes").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_with_negative_price_is_rejected() {
    let app = spawn_app().await;
    let category = app.create_category("Starters").await;

    let (status, body) = app
        .post(
            "/dishes",
            json!({ "name": "Refund Soup", "price": -1, "category": category }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn update_is_partial_and_returns_join() {
    let app = spawn_app().await;
    let starters = app.create_category("Starters").await;
    let mains = app.create_category("Mains").await;
    let dish = app.create_dish("Samosa", 40.0, &starters).await;

    let (status, body) = app
        .put(&format!("/dishes/{dish}"), json!({ "price": 45, "isAvailable": false }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Samosa");
    assert_eq!(body["data"]["price"], 45.0);
    assert_eq!(body["data"]["isAvailable"], false);
    assert_eq!(body["data"]["category"]["name"], "Starters");

    let (status, body) = app
        .put(&format!("/dishes/{dish}"), json!({ "category": mains }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"]["name"], "Mains");
    assert_eq!(body["data"]["price"], 45.0);
}

#[tokio::test]
async fn update_missing_dish_is_404() {
    let app = spawn_app().await;

    let (status, body) = app.put("/dishes/dish:missing", json!({ "price": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Dish not found");
}

#[tokio::test]
async fn delete_dish_then_again_is_404() {
    let app = spawn_app().await;
    let category = app.create_category("Starters").await;
    let dish = app.create_dish("Samosa", 40.0, &category).await;

    let (status, body) = app.delete(&format!("/dishes/{dish}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Dish deleted successfully" })
    );

    let (status, body) = app.delete(&format!("/dishes/{dish}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Dish not found");

    // Category is free to go once its dishes are gone
    let (status, _) = app.delete(&format!("/categories/{category}")).await;
    assert_eq!(status, StatusCode::OK);
}
