//! Payment API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /payment | GET | 支付记录列表 (新到旧) |
//! | /payment/create-order | POST | 网关下单 |
//! | /payment/verify-payment | POST | 校验客户端回传签名 |
//! | /payment/webhook-verification | POST | 网关 webhook (原始 body 验签) |
//! | /payment/save-details | POST | 保存支付记录 (需签名) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/payment", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/create-order", post(handler::create_order))
        .route("/verify-payment", post(handler::verify_payment))
        .route("/webhook-verification", post(handler::webhook_verification))
        .route("/save-details", post(handler::save_details))
}
