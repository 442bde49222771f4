use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{home, login, logout, register, show_login, show_register};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(show_login).post(login))
        .route("/register", get(show_register).post(register))
        .route("/logout", post(logout))
}
