use kernel::model::{id::UserId, user::User};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub username: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow { user_id, username } = value;
        Self { user_id, username }
    }
}

// Only the auth repository sees the hash; it never crosses into kernel.
#[derive(FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
