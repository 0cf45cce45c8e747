//! 问候服务：启动时生成一份用户数据后丢弃，路由只返回固定字符串

use tracing::{debug, error, info, Level};
use users_bench::{
    app::{
        greeting,
        users::{
            service::{generate_users, GREETING_FRAMEWORK},
            USERS_PATH,
        },
    },
    config::ServerConfig,
    infrastructure::logger::Logger,
    server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Logger::init(Level::INFO);

    let users = generate_users(1, GREETING_FRAMEWORK);
    debug!("已生成 {} 条用户记录（未使用）", users.len());
    drop(users);

    let config = ServerConfig::default();
    let listener = server::bind(&config).await.map_err(|e| {
        error!("启动失败: {:#}", e);
        e
    })?;

    info!("📖 可用的路由:");
    info!("   GET  {}  - 问候语", USERS_PATH);

    server::serve(listener, server::with_common_layers(greeting::router())).await
}
