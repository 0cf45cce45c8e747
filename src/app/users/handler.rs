//! 用户列表处理器

use axum::{extract::State, response::Json};

use super::{model::User, service::UserService};

#[derive(Clone, Default)]
pub struct AppState {
    pub user_service: UserService,
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users())
}
