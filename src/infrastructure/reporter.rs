//! 后台诊断上报：定期记录运行时中存活的任务数

use std::time::Duration;

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::info;

pub struct TaskReporter {
    interval: Duration,
}

impl TaskReporter {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// 当前运行时中存活的任务数
    pub fn snapshot() -> usize {
        Handle::current().metrics().num_alive_tasks()
    }

    /// 启动常驻任务，随运行时一起结束
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                info!(alive_tasks = Self::snapshot(), "当前存活任务数");
            }
        })
    }
}
