use crate::core::ServerError;

/// 数据库路径的特殊值：使用内存引擎 (测试和演示)
pub const MEMORY_DB: &str = "memory";

/// 服务器配置 - POS 后台的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_PATH | data/pos.db | RocksDB 目录 (`memory` 为内存引擎) |
/// | DB_NAMESPACE | pos | SurrealDB namespace |
/// | DB_NAME | pos | SurrealDB database |
/// | ENVIRONMENT | development | 运行环境 |
/// | RAZORPAY_KEY_ID | (dev 占位) | 支付网关 key id |
/// | RAZORPAY_KEY_SECRET | (dev 占位) | 支付网关 key secret |
/// | RAZORPAY_WEBHOOK_SECRET | (dev 占位) | Webhook 签名密钥 |
/// | RAZORPAY_BASE_URL | https://api.razorpay.com | 支付网关地址 |
/// | PAYMENT_CURRENCY | INR | 下单币种 |
/// | GATEWAY_TIMEOUT_MS | 10000 | 网关请求超时(毫秒) |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=memory HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库目录
    pub database_path: String,
    pub db_namespace: String,
    pub db_name: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 支付网关配置
    pub gateway: GatewayConfig,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

/// 支付网关配置
#[derive(Clone)]
pub struct GatewayConfig {
    pub key_id: String,
    /// 签名客户端回传的 `order_id|payment_id`
    pub key_secret: String,
    /// 签名 webhook 请求体
    pub webhook_secret: String,
    pub base_url: String,
    pub currency: String,
    pub timeout_ms: u64,
}

// 密钥不进日志
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("key_id", &self.key_id)
            .field("base_url", &self.base_url)
            .field("currency", &self.currency)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 非 development 环境下缺少密钥会返回错误
    pub fn from_env() -> Result<Self, ServerError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            http_port: env_parse("HTTP_PORT", 8000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/pos.db".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "pos".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "pos".into()),
            gateway: GatewayConfig {
                key_id: require_secret("RAZORPAY_KEY_ID", &environment)?,
                key_secret: require_secret("RAZORPAY_KEY_SECRET", &environment)?,
                webhook_secret: require_secret("RAZORPAY_WEBHOOK_SECRET", &environment)?,
                base_url: std::env::var("RAZORPAY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.razorpay.com".into()),
                currency: std::env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "INR".into()),
                timeout_ms: env_parse("GATEWAY_TIMEOUT_MS", 10_000),
            },
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30_000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// 内存数据库 + 固定密钥的配置
    ///
    /// 常用于测试场景
    pub fn for_testing(key_secret: &str, webhook_secret: &str) -> Self {
        Self {
            http_port: 0,
            database_path: MEMORY_DB.into(),
            db_namespace: "test".into(),
            db_name: "test".into(),
            environment: "development".into(),
            gateway: GatewayConfig {
                key_id: "rzp_test_key".into(),
                key_secret: key_secret.into(),
                webhook_secret: webhook_secret.into(),
                base_url: "http://127.0.0.1:9".into(),
                currency: "INR".into(),
                timeout_ms: 1_000,
            },
            request_timeout_ms: 5_000,
            log_level: "debug".into(),
            log_dir: None,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// 读取并解析环境变量，缺失或无法解析时使用默认值
fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// 密钥类环境变量：非 development 环境下必须设置且非空
fn require_secret(name: &str, environment: &str) -> Result<String, ServerError> {
    let val = match std::env::var(name) {
        Ok(v) => v,
        Err(_) => {
            if environment != "development" {
                return Err(ServerError::Config(format!(
                    "{name} must be set in {environment} environment"
                )));
            }
            format!("dev-{name}-not-for-production")
        }
    };
    if val.is_empty() && environment != "development" {
        return Err(ServerError::Config(format!(
            "{name} must not be empty in {environment} environment"
        )));
    }
    Ok(val)
}
