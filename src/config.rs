//! 服务配置
//!
//! 所有取值都在编译期确定，进程不读取配置文件、环境变量或命令行参数。

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 3000;

/// HTTP 服务配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: IpAddr,
    /// HTTP 服务端口
    pub port: u16,
    /// 同时执行的处理器上限
    pub max_concurrency: usize,
    /// 后台任务数上报间隔
    pub report_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_concurrency: num_cpus::get(),
            report_interval: Duration::from_secs(1),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
