use receipt_points::{create_router, AppConfig, MemoryStore, ReceiptService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置 (日志级别来自配置, 需先于日志初始化)
    let config = AppConfig::from_env();

    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_max_level(config.log_level())
        .with_target(true)
        .with_level(true)
        .init();

    info!("Starting server with config: {:?}", config);

    // 收据存储 (内存)
    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(ReceiptService::new(store));

    let app = create_router(service);

    // 启动服务器
    let addr = config.listen_addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /receipts/process     - Submit a receipt");
    info!("  GET  /receipts/:id/points  - Points for a receipt");
    info!("  GET  /receipts/:id         - Submitted receipt");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
