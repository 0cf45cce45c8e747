//! 用户数据模型

use serde::{Deserialize, Serialize};

/// 合成用户记录，字段名与序列化顺序固定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: u32,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Framework")]
    pub framework: String,
}
