//! 核心模块 - 启动所需的一切
//!
//! - [`config`] - 环境变量配置 (端口、数据库、支付网关密钥)
//! - [`state`] - 请求共享的数据库和网关句柄
//! - [`server`] - 监听端口与优雅退出
//! - [`error`] - 启动期错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, GatewayConfig};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
