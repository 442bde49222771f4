use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::auth::SessionId;
use kernel::model::id::UserId;
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{model::user::UserCredentialRow, ConnectionPool};
use crate::redis::RedisClient;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserCredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };
        if !bcrypt::verify(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.user_id)
    }

    async fn create_session(&self, user_id: UserId) -> AppResult<SessionId> {
        let session_id = SessionId::from(Uuid::new_v4().simple().to_string());
        self.kv
            .set_ex(&session_key(&session_id), &user_id.to_string(), self.ttl)
            .await?;
        Ok(session_id)
    }

    async fn fetch_user_id_from_session(
        &self,
        session_id: &SessionId,
    ) -> AppResult<Option<UserId>> {
        let value = self.kv.get(&session_key(session_id)).await?;
        value
            .map(|raw| {
                raw.parse::<i64>()
                    .map(UserId::new)
                    .map_err(|e| AppError::ConversionEntityError(e.to_string()))
            })
            .transpose()
    }

    async fn delete_session(&self, session_id: &SessionId) -> AppResult<()> {
        self.kv.delete(&session_key(session_id)).await
    }
}

fn session_key(session_id: &SessionId) -> String {
    format!("session:{session_id}")
}
