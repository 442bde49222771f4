use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::UserId;
use kernel::model::user::{event::CreateUser, User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        // Application-level pre-check; the UNIQUE constraint below remains
        // the arbiter when two registrations race.
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
                .bind(&event.username)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if exists {
            return Err(AppError::DuplicateEntity("Username already exists.".into()));
        }

        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (username, password_hash)
                VALUES ($1, $2)
                RETURNING user_id, username
            "#,
        )
        .bind(&event.username)
        .bind(&password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                AppError::DuplicateEntity("Username already exists.".into())
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, username
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, username
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres"]
    async fn register_user_and_find_it_back(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateUser::new("  alice  ", "pw")?)
            .await?;
        assert_eq!(created.username, "alice");

        let found = repo.find_by_username("alice").await?;
        assert_eq!(found, Some(created.clone()));

        let by_id = repo.find_current_user(created.user_id).await?;
        assert_eq!(by_id, Some(created));

        // lookups are byte-exact on the stored value
        assert!(repo.find_by_username("  alice  ").await?.is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    #[ignore = "requires a running Postgres"]
    async fn duplicate_username_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser::new("alice", "pw")?).await?;
        let err = repo
            .create(CreateUser::new("alice", "other")?)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Username already exists.");
        Ok(())
    }
}
