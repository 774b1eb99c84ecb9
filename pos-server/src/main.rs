use pos_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env (可选)
    dotenv::dotenv().ok();

    // 2. 加载配置 (日志初始化依赖其中的级别和目录)
    let config = Config::from_env()?;

    // 3. 初始化日志 (生产环境输出 JSON)
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "🍽️ POS server starting..."
    );

    // 4. 初始化服务器状态 (数据库 + 支付网关)
    let state = ServerState::initialize(&config).await?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
