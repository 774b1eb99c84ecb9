//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::json_body;
use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, RepoError};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// GET /categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(ApiResponse::success(
        categories.into_iter().map(Into::into).collect(),
    ))
}

/// GET /categories/:id - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    Ok(ApiResponse::success(category.into()))
}

/// POST /categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CategoryCreate>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<Category>)> {
    let mut payload = json_body(payload)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    payload.name = payload.name.trim().to_string();

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;

    tracing::info!(id = %category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, ApiResponse::success(category.into())))
}

/// PUT /categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryUpdate>, JsonRejection>,
) -> AppResult<ApiResponse<Category>> {
    let mut payload = json_body(payload)?;
    if let Some(name) = payload.name.as_deref() {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    payload.name = payload.name.map(|n| n.trim().to_string());

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    Ok(ApiResponse::success(category.into()))
}

/// DELETE /categories/:id - 删除分类
///
/// 仍有菜品引用的分类不能删除 (409)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = CategoryRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await.map_err(|e| match e {
        RepoError::Conflict(msg) => AppError::with_message(ErrorCode::CategoryHasDishes, msg),
        other => other.into(),
    })?;

    if !deleted {
        return Err(AppError::new(ErrorCode::CategoryNotFound));
    }

    tracing::info!(id = %id, "Category deleted");
    Ok(ApiResponse::ok_with_message("Category deleted successfully"))
}
