//! 用户数据生成服务

use super::model::User;

/// 每次生成的记录数量
pub const USER_COUNT: usize = 1000;
/// 所有记录的固定年龄
pub const USER_AGE: u32 = 25;
/// 用户列表接口使用的框架标签（末尾带两个空格）
pub const BENCHMARK_FRAMEWORK: &str = "Golang (fiber)  ";
/// 问候服务启动时生成数据使用的框架标签
pub const GREETING_FRAMEWORK: &str = "Golang (fiber)";

/// 生成 `USER_COUNT` 条连续编号的记录，编号从 `first_id` 开始
pub fn generate_users(first_id: u32, framework: &str) -> Vec<User> {
    let mut users = Vec::with_capacity(USER_COUNT);
    for id in (first_id..).take(USER_COUNT) {
        let index = id.to_string();
        users.push(User {
            id,
            age: USER_AGE,
            first_name: format!("First_name{index}"),
            last_name: format!("Last_Name{index}"),
            framework: framework.to_string(),
        });
    }
    users
}

#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// 每次调用都重新生成，编号从 0 开始
    pub fn list_users(&self) -> Vec<User> {
        generate_users(0, BENCHMARK_FRAMEWORK)
    }
}
