//! Shared helpers for the HTTP integration tests
//!
//! Each test gets its own in-memory SurrealDB and a fake payment gateway.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use pos_server::db::DbService;
use pos_server::payment::{OrderRequest, PaymentError, PaymentGateway};
use pos_server::{Config, ServerState, build_app};
use serde_json::Value;
use shared::models::GatewayOrder;
use tower::ServiceExt;

pub const KEY_SECRET: &str = "test_key_secret";
pub const WEBHOOK_SECRET: &str = "test_webhook_secret";

/// In-process gateway that records requests
#[derive(Default)]
pub struct FakeGateway {
    pub requests: Mutex<Vec<OrderRequest>>,
    pub fail: bool,
}

impl FakeGateway {
    pub fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, PaymentError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());

        if self.fail {
            return Err(PaymentError::GatewayStatus {
                status: 500,
                body: "upstream exploded".into(),
            });
        }

        Ok(GatewayOrder {
            id: format!("order_test{}", requests.len()),
            entity: "order".into(),
            amount: request.amount,
            amount_paid: 0,
            amount_due: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
            status: "created".into(),
            attempts: 0,
            created_at: 1_700_000_000,
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    pub gateway: Arc<FakeGateway>,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(FakeGateway::default()).await
}

pub async fn spawn_app_with(gateway: FakeGateway) -> TestApp {
    let config = Config::for_testing(KEY_SECRET, WEBHOOK_SECRET);
    let db = DbService::new(&config).await.unwrap().db;
    let gateway = Arc::new(gateway);
    let state = ServerState::new(config, db, gateway.clone());
    TestApp {
        router: build_app(state.clone()),
        state,
        gateway,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST a raw body, optionally with a webhook signature header
    pub async fn post_raw(&self, uri: &str, body: &[u8], signature: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(sig) = signature {
            builder = builder.header("x-razorpay-signature", sig);
        }
        let request = builder.body(Body::from(body.to_vec())).unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    /// Create a category and return its id
    pub async fn create_category(&self, name: &str) -> String {
        let (status, body) = self
            .post("/categories", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["_id"].as_str().unwrap().to_string()
    }

    /// Create a dish and return its id
    pub async fn create_dish(&self, name: &str, price: f64, category_id: &str) -> String {
        let (status, body) = self
            .post(
                "/dishes",
                serde_json::json!({ "name": name, "price": price, "category": category_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["_id"].as_str().unwrap().to_string()
    }
}
