use shared::error::{AppError, AppResult};

use crate::model::goal::Category;
use crate::model::id::UserId;

/// Goal creation request after input validation. The text is trimmed
/// exactly once; length beyond the column bound is left to the store.
#[derive(Debug, PartialEq, Eq)]
pub struct CreateGoalItem {
    pub owned_by: UserId,
    pub category: Category,
    pub text: String,
}

impl CreateGoalItem {
    pub fn new(owned_by: UserId, category: Category, text: &str) -> AppResult<Self> {
        if text.trim().is_empty() {
            return Err(AppError::UnprocessableEntity("Text cannot be empty.".into()));
        }
        Ok(Self {
            owned_by,
            category,
            text: text.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_trims_text() {
        let event =
            CreateGoalItem::new(UserId::new(1), Category::ShortTerm, "  learn rust  ").unwrap();
        assert_eq!(event.text, "learn rust");
        assert_eq!(event.category, Category::ShortTerm);
        assert_eq!(event.owned_by, UserId::new(1));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn new_rejects_blank_text(#[case] text: &str) {
        let err = CreateGoalItem::new(UserId::new(1), Category::Wish, text).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert_eq!(err.to_string(), "Text cannot be empty.");
    }
}
