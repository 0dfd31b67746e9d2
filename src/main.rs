//! postbridge - JSONPlaceholder 聚合代理

use std::sync::Arc;

use postbridge::application::PlaceholderApiPort;
use postbridge::config::{load_config, print_config, AppConfig};
use postbridge::infrastructure::adapters::{
    HttpPlaceholderClient, HttpPlaceholderClientConfig, InMemoryPlaceholderClient,
};
use postbridge::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("postbridge - JSONPlaceholder aggregation proxy");
    print_config(&config);

    // 进程级上游客户端，所有请求共享同一个连接池
    let upstream: Arc<dyn PlaceholderApiPort> = if config.upstream.fake {
        Arc::new(InMemoryPlaceholderClient::seeded())
    } else {
        let client_config = HttpPlaceholderClientConfig::new(config.upstream.base_url.clone())
            .with_timeout(config.upstream.timeout_secs);
        Arc::new(HttpPlaceholderClient::new(client_config)?)
    };

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(upstream);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置文件
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},postbridge={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
