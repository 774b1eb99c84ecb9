use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::payment::{PaymentGateway, RazorpayGateway};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 可克隆句柄实现浅拷贝，每个请求拿到的都是同一组服务。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | gateway | Arc<dyn PaymentGateway> | 支付网关客户端 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 支付网关 (测试中可替换为假实现)
    pub gateway: Arc<dyn PaymentGateway>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Surreal<Db>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            config,
            db,
            gateway,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 打开数据库并应用 schema
    /// 2. 创建支付网关客户端
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = DbService::new(config).await?;

        let gateway = RazorpayGateway::new(&config.gateway)
            .map_err(|e| ServerError::Config(format!("Failed to build gateway client: {e}")))?;

        tracing::info!(gateway = ?config.gateway, "Payment gateway configured");

        Ok(Self::new(config.clone(), db_service.db, Arc::new(gateway)))
    }
}
