//! Category endpoints through the full router

mod common;

use common::spawn_app;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_then_list_contains_category() {
    let app = spawn_app().await;

    let (status, body) = app
        .post("/categories", json!({ "name": "Starters", "description": "Small plates" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Starters");
    assert_eq!(body["data"]["description"], "Small plates");
    let id = body["data"]["_id"].as_str().unwrap().to_string();
    assert!(id.starts_with("category:"));

    let (status, body) = app.get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["_id"], id.as_str());
    assert_eq!(list[0]["name"], "Starters");
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let app = spawn_app().await;
    for name in ["Starters", "Mains", "Desserts"] {
        app.create_category(name).await;
    }

    let (_, body) = app.get("/categories").await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Starters", "Mains", "Desserts"]);
}

#[tokio::test]
async fn get_by_id_accepts_full_and_bare_id() {
    let app = spawn_app().await;
    let id = app.create_category("Beverages").await;
    let bare = id.strip_prefix("category:").unwrap();

    let (status, body) = app.get(&format!("/categories/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Beverages");

    let (status, body) = app.get(&format!("/categories/{bare}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["_id"], id.as_str());
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let app = spawn_app().await;

    let (status, body) = app.post("/categories", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "name must not be empty");

    let (_, body) = app.get("/categories").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_malformed_body() {
    let app = spawn_app().await;

    let (status, body) = app.post("/categories", json!({ "description": "no name" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn update_merges_present_fields() {
    let app = spawn_app().await;
    let (_, body) = app
        .post("/categories", json!({ "name": "Mains", "description": "Large plates" }))
        .await;
    let id = body["data"]["_id"].as_str().unwrap().to_string();

    let (status, body) = app
        .put(&format!("/categories/{id}"), json!({ "name": "Main Course" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Main Course");
    assert_eq!(body["data"]["description"], "Large plates");
}

#[tokio::test]
async fn update_missing_category_is_404() {
    let app = spawn_app().await;

    let (status, body) = app
        .put("/categories/category:doesnotexist", json!({ "name": "Ghost" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn delete_missing_category_is_404() {
    let app = spawn_app().await;

    let (status, body) = app.delete("/categories/category:doesnotexist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn delete_removes_category() {
    let app = spawn_app().await;
    let id = app.create_category("Seasonal").await;

    let (status, body) = app.delete(&format!("/categories/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Category deleted successfully" })
    );

    let (status, _) = app.get(&format!("/categories/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_category_with_dishes_is_conflict() {
    let app = spawn_app().await;
    let category = app.create_category("Starters").await;
    app.create_dish("Samosa", 40.0, &category).await;

    let (status, body) = app.delete(&format!("/categories/{category}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6102);

    let (status, _) = app.get(&format!("/categories/{category}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn id_from_another_table_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app.get("/categories/dish:abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_route_uses_envelope() {
    let app = spawn_app().await;

    let (status, body) = app.get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
