use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::auth::SessionId;
use crate::model::id::UserId;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Checks the password against the stored hash and returns the user id.
    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId>;
    async fn create_session(&self, user_id: UserId) -> AppResult<SessionId>;
    async fn fetch_user_id_from_session(
        &self,
        session_id: &SessionId,
    ) -> AppResult<Option<UserId>>;
    async fn delete_session(&self, session_id: &SessionId) -> AppResult<()>;
}
