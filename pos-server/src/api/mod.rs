//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类管理接口
//! - [`dishes`] - 菜品管理接口
//! - [`payment`] - 支付网关接口 (下单、验签、webhook、支付记录)

pub mod convert;

pub mod categories;
pub mod dishes;
pub mod health;
pub mod payment;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use shared::{AppError, AppResult, ErrorCode};

/// Unwrap a JSON body, turning extractor rejections into the error envelope
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            rejection.body_text(),
        )),
    }
}
