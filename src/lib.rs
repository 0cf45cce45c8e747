//! # users-bench
//!
//! 两个用于压测的最小 HTTP 服务：
//! - `users_server`：`GET /api/v1/users` 返回 1000 条合成用户记录，处理器并发数受 CPU 数量限制
//! - `hello_server`：同一路径返回固定问候语

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod server;
