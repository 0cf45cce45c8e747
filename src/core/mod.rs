//! 核心层：错误处理、中间件与并发闸门

pub mod error;
pub mod gate;
pub mod middleware;
