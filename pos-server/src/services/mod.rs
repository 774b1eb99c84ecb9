//! 服务模块
//!
//! - [`https`] - HTTP 路由组装和中间件

pub mod https;

pub use https::{build_app, build_router};
