use async_trait::async_trait;
use derive_new::new;
use kernel::model::goal::{event::CreateGoalItem, Category, GoalItem};
use kernel::model::id::UserId;
use kernel::repository::goal::GoalRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::goal::GoalItemRow, ConnectionPool};

#[derive(new)]
pub struct GoalRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GoalRepository for GoalRepositoryImpl {
    async fn create(&self, event: CreateGoalItem) -> AppResult<GoalItem> {
        let row: GoalItemRow = sqlx::query_as(
            r#"
                INSERT INTO goal_items (user_id, category, text)
                VALUES ($1, $2, $3)
                RETURNING goal_item_id, user_id, category, text, created_at
            "#,
        )
        .bind(event.owned_by)
        .bind(event.category.to_string())
        .bind(&event.text)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        GoalItem::try_from(row)
    }

    async fn find_by_user_and_category(
        &self,
        user_id: UserId,
        category: Category,
    ) -> AppResult<Vec<GoalItem>> {
        let rows: Vec<GoalItemRow> = sqlx::query_as(
            r#"
                SELECT goal_item_id, user_id, category, text, created_at
                FROM goal_items
                WHERE user_id = $1 AND category = $2
                ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(category.to_string())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(GoalItem::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres"]
    async fn listing_is_newest_first_and_scoped(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = GoalRepositoryImpl::new(ConnectionPool::new(pool));

        let alice = users.create(CreateUser::new("alice", "pw")?).await?;
        let bob = users.create(CreateUser::new("bob", "pw")?).await?;

        repo.create(CreateGoalItem::new(alice.user_id, Category::Todo, "first")?)
            .await?;
        repo.create(CreateGoalItem::new(alice.user_id, Category::Todo, "second")?)
            .await?;
        repo.create(CreateGoalItem::new(alice.user_id, Category::Wish, "a pony")?)
            .await?;
        repo.create(CreateGoalItem::new(bob.user_id, Category::Todo, "not hers")?)
            .await?;

        let items = repo
            .find_by_user_and_category(alice.user_id, Category::Todo)
            .await?;
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);

        let empty = repo
            .find_by_user_and_category(bob.user_id, Category::Wish)
            .await?;
        assert!(empty.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres"]
    async fn created_item_keeps_trimmed_text(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = GoalRepositoryImpl::new(ConnectionPool::new(pool));

        let alice = users.create(CreateUser::new("alice", "pw")?).await?;
        let item = repo
            .create(CreateGoalItem::new(
                alice.user_id,
                Category::ShortTerm,
                "  learn rust  ",
            )?)
            .await?;

        assert_eq!(item.text, "learn rust");
        assert_eq!(item.category, Category::ShortTerm);
        assert_eq!(item.owned_by, alice.user_id);
        Ok(())
    }
}
