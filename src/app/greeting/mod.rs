//! 问候应用：同一路径只返回固定字符串

pub mod handler;

use axum::{routing::get, Router};

use crate::app::users::USERS_PATH;

pub fn router() -> Router {
    Router::new().route(USERS_PATH, get(handler::hello))
}
