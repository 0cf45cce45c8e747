//! 问候处理器

pub const GREETING: &str = "Hello, World 👋!";

pub async fn hello() -> &'static str {
    GREETING
}
