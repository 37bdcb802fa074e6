//! todod - Todo 资源 HTTP 服务

use std::sync::Arc;

use todod::config::{load_config, print_config, AppConfig};
use todod::infrastructure::http::{AppState, HttpServer, ServerConfig};
use todod::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteDbProvider,
};

/// 初始化日志，`RUST_LOG` 优先于配置
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},todod={},tower_http=debug,sqlx=warn",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("todod - Todo 资源服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
        busy_timeout_ms: config.database.busy_timeout_ms,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let provider = Arc::new(SqliteDbProvider::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, AppState::new(provider));

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
