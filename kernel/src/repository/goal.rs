use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::goal::{event::CreateGoalItem, Category, GoalItem};
use crate::model::id::UserId;

#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn create(&self, event: CreateGoalItem) -> AppResult<GoalItem>;
    // newest first; empty when the user has no items in the category
    async fn find_by_user_and_category(
        &self,
        user_id: UserId,
        category: Category,
    ) -> AppResult<Vec<GoalItem>>;
}
