use tracing::{error, info, Level};
use users_bench::{
    app::users::{self, USERS_PATH},
    config::ServerConfig,
    core::gate::ConcurrencyGate,
    infrastructure::{logger::Logger, reporter::TaskReporter},
    server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Logger::init(Level::INFO);

    let config = ServerConfig::default();
    let gate = ConcurrencyGate::new(config.max_concurrency);

    TaskReporter::new(config.report_interval).spawn();

    let listener = server::bind(&config).await.map_err(|e| {
        error!("启动失败: {:#}", e);
        e
    })?;

    info!("并发闸门容量: {}", gate.capacity());
    info!("📖 可用的路由:");
    info!("   GET  {}  - 1000 条用户记录 (JSON)", USERS_PATH);

    server::serve(listener, server::with_common_layers(users::router(gate))).await
}
