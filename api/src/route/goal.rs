use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::goal::{add_item, guidance, show_category};

pub fn build_goal_routers() -> Router<AppRegistry> {
    let goals_routers = Router::new()
        .route("/:category", get(show_category))
        .route("/:category/add", post(add_item))
        .route("/:category/guidance", post(guidance));

    Router::new().nest("/goals", goals_routers)
}
