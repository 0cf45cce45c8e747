//! 日志基础设施

use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 默认级别为 `level`，`RUST_LOG` 可以覆盖；重复初始化会被忽略
    pub fn init(level: Level) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}
