use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::UserId;
use crate::model::user::{event::CreateUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user. The duplicate pre-check and the store's unique
    /// constraint both surface as a duplicate error.
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    // byte-exact lookup on the stored username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>>;
}
