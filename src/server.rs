//! HTTP 监听与公共路由层

use anyhow::Context;
use axum::{http::Uri, middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::core::{error::CoreError, middleware::request_logging_middleware};

/// 绑定失败直接返回错误，调用方应终止进程
pub async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {addr}"))?;
    info!("🚀 服务器运行在 http://{}", listener.local_addr()?);
    Ok(listener)
}

/// 加上 404 兜底、请求日志和追踪层
pub fn with_common_layers(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await.context("服务器运行失败")
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(uri.path().to_string())
}
