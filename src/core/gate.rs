//! 并发闸门
//!
//! 基于 `tokio::sync::Semaphore` 的计数信号量，限制同时执行的处理器数量。
//! 许可在 [`GatePermit`] 被 drop 时归还，正常返回、错误返回或 panic 展开都一样。

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, error};

use super::error::CoreError;

/// 并发闸门，克隆后共享同一组许可
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// 已获取的许可
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}

impl ConcurrencyGate {
    /// 容量至少为 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// 按当前可用逻辑处理器数量创建
    pub fn for_available_processors() -> Self {
        Self::new(num_cpus::get())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// 等待一个许可，没有超时
    pub async fn acquire(&self) -> Result<GatePermit, CoreError> {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| CoreError::ServiceUnavailable("并发闸门已关闭".to_string()))?;
        Ok(GatePermit { _permit: permit })
    }

    /// 关闭闸门，之后的 acquire 全部失败，等待中的请求也会被唤醒并失败
    pub fn close(&self) {
        self.semaphore.close();
    }
}

/// 闸门中间件：持有一个许可直到内层处理器返回
pub async fn gate_middleware(
    State(gate): State<ConcurrencyGate>,
    req: Request,
    next: Next,
) -> Result<Response, CoreError> {
    let permit = gate.acquire().await.map_err(|e| {
        error!("获取并发许可失败: {}", e);
        e
    })?;
    debug!(
        available = gate.available_permits(),
        capacity = gate.capacity(),
        "已获取并发许可"
    );

    let response = next.run(req).await;
    drop(permit);
    Ok(response)
}
