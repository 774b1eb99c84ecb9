//! Dish API Handlers
//!
//! Every dish in a response carries its category joined as `{_id, name}`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::json_body;
use crate::core::ServerState;
use crate::db::repository::DishRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Dish, DishCreate, DishUpdate};

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::new(ErrorCode::DishInvalidPrice));
    }
    Ok(())
}

/// GET /dishes - 获取所有菜品 (含分类)
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Dish>>> {
    let repo = DishRepository::new(state.db.clone());
    let dishes = repo.find_all().await?;
    Ok(ApiResponse::success(dishes.into_iter().map(Into::into).collect()))
}

/// GET /dishes/category/:category_id - 按分类获取菜品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> AppResult<ApiResponse<Vec<Dish>>> {
    let repo = DishRepository::new(state.db.clone());
    let dishes = repo.find_by_category(&category_id).await?;
    Ok(ApiResponse::success(dishes.into_iter().map(Into::into).collect()))
}

/// GET /dishes/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Dish>> {
    let repo = DishRepository::new(state.db.clone());
    let dish = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))?;
    Ok(ApiResponse::success(dish.into()))
}

/// POST /dishes - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DishCreate>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<Dish>)> {
    let mut payload = json_body(payload)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_price(payload.price)?;
    payload.name = payload.name.trim().to_string();

    let repo = DishRepository::new(state.db.clone());
    let dish = repo.create(payload).await?;

    tracing::info!(id = %dish.id, name = %dish.name, price = dish.price, "Dish created");
    Ok((StatusCode::CREATED, ApiResponse::success(dish.into())))
}

/// PUT /dishes/:id - 更新菜品 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<DishUpdate>, JsonRejection>,
) -> AppResult<ApiResponse<Dish>> {
    let mut payload = json_body(payload)?;
    if let Some(name) = payload.name.as_deref() {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(category) = payload.category.as_deref() {
        validate_required_text(category, "category", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    payload.name = payload.name.map(|n| n.trim().to_string());

    let repo = DishRepository::new(state.db.clone());
    let dish = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DishNotFound))?;
    Ok(ApiResponse::success(dish.into()))
}

/// DELETE /dishes/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = DishRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::new(ErrorCode::DishNotFound));
    }

    tracing::info!(id = %id, "Dish deleted");
    Ok(ApiResponse::ok_with_message("Dish deleted successfully"))
}
