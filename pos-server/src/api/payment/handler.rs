//! Payment API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use chrono::DateTime;

use crate::api::json_body;
use crate::core::ServerState;
use crate::db::models::PaymentContent;
use crate::db::repository::PaymentRepository;
use crate::db::repository::payment::Inserted;
use crate::payment::amount::to_minor_units;
use crate::payment::signature::{verify_payment_signature, verify_webhook_signature};
use crate::payment::webhook::WebhookEvent;
use crate::payment::OrderRequest;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_SHORT_TEXT_LEN, non_empty, validate_amount, validate_optional_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    CreateOrderRequest, CreateOrderResponse, Payment, SavePaymentRequest, TimestampInput,
    VerifyPaymentRequest,
};

/// Header carrying the webhook signature
const SIGNATURE_HEADER: &str = "x-razorpay-signature";

/// Status recorded when the client omits it; a gateway signature is only
/// issued for a successful payment
const DEFAULT_SAVED_STATUS: &str = "captured";

const MISSING_FIELDS: &str = "Missing required fields!";

/// GET /payment - 支付记录列表
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Payment>>> {
    let repo = PaymentRepository::new(state.db.clone());
    let payments = repo.find_all().await?;
    Ok(ApiResponse::success(payments.into_iter().map(Into::into).collect()))
}

/// POST /payment/create-order - 网关下单
///
/// 金额按主单位传入，四舍五入 (远离零) 为最小单位
pub async fn create_order(
    State(state): State<ServerState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<Json<CreateOrderResponse>> {
    let payload = json_body(payload)?;
    let amount = payload
        .amount
        .ok_or_else(|| AppError::required_field("amount is required"))?;
    let minor = to_minor_units(amount)?;

    let request = OrderRequest::new(minor, state.config.gateway.currency.clone());
    tracing::debug!(amount = minor, receipt = %request.receipt, "Creating gateway order");
    let order = state.gateway.create_order(request).await?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order,
    }))
}

/// POST /payment/verify-payment - 校验客户端回传的支付签名
///
/// 只做校验，不落库
pub async fn verify_payment(
    State(state): State<ServerState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> AppResult<ApiResponse<()>> {
    let payload = json_body(payload)?;
    let (Some(order_id), Some(payment_id), Some(signature)) = (
        non_empty(&payload.razorpay_order_id),
        non_empty(&payload.razorpay_payment_id),
        non_empty(&payload.razorpay_signature),
    ) else {
        return Err(AppError::required_field(MISSING_FIELDS));
    };

    if let Err(e) = verify_payment_signature(
        &state.config.gateway.key_secret,
        order_id,
        payment_id,
        signature,
    ) {
        crate::security_log!(
            "payment_signature_mismatch",
            order_id = order_id,
            payment_id = payment_id
        );
        return Err(e.into());
    }

    tracing::info!(order_id = %order_id, payment_id = %payment_id, "Payment verified");
    Ok(ApiResponse::ok_with_message("Payment verified successfully!"))
}

/// POST /payment/webhook-verification - 网关 webhook
///
/// 签名基于原始 body 字节计算，必须在解析 JSON 之前验证
pub async fn webhook_verification(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<ApiResponse<()>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let Some(signature) = signature else {
        crate::security_log!("webhook_signature_missing");
        return Err(AppError::new(ErrorCode::InvalidSignature));
    };

    if verify_webhook_signature(&state.config.gateway.webhook_secret, &body, signature).is_err() {
        crate::security_log!("webhook_signature_mismatch", body_len = body.len());
        return Err(AppError::new(ErrorCode::InvalidSignature));
    }

    let event: WebhookEvent = serde_json::from_slice(&body).map_err(|e| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Malformed webhook payload: {e}"),
        )
    })?;

    if !event.is_payment_captured() {
        tracing::debug!(event = %event.event, "Unhandled webhook event");
        return Ok(ApiResponse::ok());
    }

    let entity = event.into_payment_entity().ok_or_else(|| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            "payment.captured event without payment entity",
        )
    })?;

    let repo = PaymentRepository::new(state.db.clone());
    log_inserted(&repo.insert_once(entity.into_content()).await?, "webhook");

    Ok(ApiResponse::ok())
}

/// POST /payment/save-details - 保存客户端提交的支付记录
///
/// 需要携带网关对 `orderId|paymentId` 的签名
pub async fn save_details(
    State(state): State<ServerState>,
    payload: Result<Json<SavePaymentRequest>, JsonRejection>,
) -> AppResult<ApiResponse<()>> {
    let payload = json_body(payload)?;
    let (Some(payment_id), Some(order_id), Some(signature)) = (
        non_empty(&payload.payment_id),
        non_empty(&payload.order_id),
        non_empty(&payload.signature),
    ) else {
        return Err(AppError::required_field(MISSING_FIELDS));
    };

    if let Err(e) = verify_payment_signature(
        &state.config.gateway.key_secret,
        order_id,
        payment_id,
        signature,
    ) {
        crate::security_log!(
            "save_details_signature_mismatch",
            order_id = order_id,
            payment_id = payment_id
        );
        return Err(e.into());
    }

    let amount = payload
        .amount
        .ok_or_else(|| AppError::required_field("amount is required"))?;
    validate_amount(amount, "amount")?;
    validate_optional_text(&payload.currency, "currency", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.method, "method", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;

    let created_at = match &payload.created_at {
        Some(ts) => parse_timestamp(ts)?,
        None => chrono::Utc::now().timestamp_millis(),
    };

    let content = PaymentContent {
        payment_id: payment_id.to_string(),
        order_id: Some(order_id.to_string()),
        amount,
        currency: non_empty(&payload.currency)
            .unwrap_or(state.config.gateway.currency.as_str())
            .to_string(),
        status: non_empty(&payload.status)
            .unwrap_or(DEFAULT_SAVED_STATUS)
            .to_string(),
        method: payload.method.clone(),
        email: payload.email.clone(),
        contact: payload.contact.clone(),
        created_at,
    };

    let repo = PaymentRepository::new(state.db.clone());
    log_inserted(&repo.insert_once(content).await?, "save-details");

    Ok(ApiResponse::ok_with_message("Payment details saved successfully"))
}

/// RFC 3339 string or unix millis, as unix millis
fn parse_timestamp(ts: &TimestampInput) -> AppResult<i64> {
    match ts {
        TimestampInput::Millis(millis) => DateTime::from_timestamp_millis(*millis)
            .map(|dt| dt.timestamp_millis())
            .ok_or_else(|| AppError::validation(format!("createdAt {millis} is out of range"))),
        TimestampInput::Text(text) => DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.timestamp_millis())
            .map_err(|_| {
                AppError::with_message(
                    ErrorCode::InvalidFormat,
                    format!("createdAt '{text}' is not an RFC 3339 timestamp"),
                )
            }),
    }
}

fn log_inserted(inserted: &Inserted, source: &str) {
    match inserted {
        Inserted::Created(row) => tracing::info!(
            source,
            payment_id = %row.payment_id,
            amount = row.amount,
            currency = %row.currency,
            "Payment recorded"
        ),
        Inserted::Existing(row) => tracing::info!(
            source,
            payment_id = %row.payment_id,
            "Payment already recorded, skipping"
        ),
    }
}
