use crate::model::id::UserId;

pub mod event;

/// An application user. The password hash never leaves the adapter layer,
/// so it is not part of this model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
}
