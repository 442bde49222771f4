use shared::error::{AppError, AppResult};

/// Registration request after input validation.
///
/// The username is trimmed exactly once here; it is never re-normalized
/// afterwards and lookups are byte-exact on the stored value. The password
/// is deliberately left untrimmed and is hashed by the repository.
#[derive(Debug, PartialEq, Eq)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}

impl CreateUser {
    pub fn new(username: &str, password: &str) -> AppResult<Self> {
        if username.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "Username cannot be empty.".into(),
            ));
        }
        if password.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "Password cannot be empty.".into(),
            ));
        }
        Ok(Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_trims_username_but_not_password() {
        let event = CreateUser::new("  alice  ", " pw ").unwrap();
        assert_eq!(event.username, "alice");
        assert_eq!(event.password, " pw ");
    }

    #[rstest]
    #[case("", "pw")]
    #[case("  ", "pw")]
    fn new_rejects_blank_username(#[case] username: &str, #[case] password: &str) {
        let err = CreateUser::new(username, password).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert_eq!(err.to_string(), "Username cannot be empty.");
    }

    #[rstest]
    #[case("alice", "")]
    #[case("alice", " ")]
    fn new_rejects_blank_password(#[case] username: &str, #[case] password: &str) {
        let err = CreateUser::new(username, password).unwrap_err();
        assert_eq!(err.to_string(), "Password cannot be empty.");
    }
}
