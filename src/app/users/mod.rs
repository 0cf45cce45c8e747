//! 用户列表应用：`GET /api/v1/users` 返回 1000 条合成记录，受并发闸门限制

pub mod handler;
pub mod model;
pub mod service;

use axum::{middleware, routing::get, Router};

use crate::core::gate::{gate_middleware, ConcurrencyGate};
use handler::{list_users, AppState};

pub const USERS_PATH: &str = "/api/v1/users";

/// 闸门只包住用户路由，未命中的路径不占用许可
pub fn router(gate: ConcurrencyGate) -> Router {
    Router::new()
        .route(USERS_PATH, get(list_users))
        .route_layer(middleware::from_fn_with_state(gate, gate_middleware))
        .with_state(AppState::default())
}
