use std::str::FromStr;

use kernel::model::{
    goal::{Category, GoalItem},
    id::{GoalItemId, UserId},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct GoalItemRow {
    pub goal_item_id: GoalItemId,
    pub user_id: UserId,
    pub category: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<GoalItemRow> for GoalItem {
    type Error = AppError;

    fn try_from(value: GoalItemRow) -> Result<Self, Self::Error> {
        let GoalItemRow {
            goal_item_id,
            user_id,
            category,
            text,
            created_at,
        } = value;
        // the column only ever holds one of the four enum names
        let category = Category::from_str(&category).map_err(|e| {
            AppError::ConversionEntityError(format!("unknown category {category}: {e}"))
        })?;
        Ok(GoalItem {
            goal_item_id,
            category,
            text,
            created_at,
            owned_by: user_id,
        })
    }
}
