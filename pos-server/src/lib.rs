//! POS Server - 餐厅收银后台
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (分类、菜品、支付记录)
//! - **支付** (`payment`): 网关下单、HMAC-SHA256 验签、webhook 事件
//! - **HTTP API** (`api`): RESTful 接口，统一 `{success, data|message}` 响应
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 数据库层 (models + repository)
//! ├── payment/       # 支付网关集成
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装和中间件
//! └── utils/         # 日志、输入校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod payment;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use payment::{PaymentGateway, RazorpayGateway};
pub use services::build_app;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 验签失败等安全事件
#[macro_export]
macro_rules! security_log {
    ($event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::warn!(
            target: "security",
            event = $event
            $(, $key = %$value)*,
            "security event"
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
    "#
    );
}
