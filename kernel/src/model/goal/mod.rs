use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::model::id::{GoalItemId, UserId};

pub mod event;

/// The four fixed goal groupings. The wire and storage form is the
/// SCREAMING_SNAKE_CASE name, which also appears in URL paths.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    LongTerm,
    ShortTerm,
    Todo,
    Wish,
}

impl Category {
    /// Category-specific prompt sent to the completion endpoint, embedding
    /// the rendered item list.
    pub fn guidance_prompt(&self, items_list: &str) -> String {
        match self {
            Category::ShortTerm => format!(
                "These are my short-term goals:\n{items_list}\n\n\
                 Please give detailed advice on how I can smoothly achieve them.\n\
                 Provide:\n\
                 1) Step-by-step plan\n\
                 2) Weekly schedule\n\
                 3) Risks + mitigations\n"
            ),
            Category::LongTerm => format!(
                "These are my long-term goals:\n{items_list}\n\n\
                 Help me break them into milestones with realistic timelines.\n\
                 Provide milestones + 90-day action plan.\n"
            ),
            Category::Todo => format!(
                "These are my TODO items:\n{items_list}\n\n\
                 Help me prioritize and propose a 7-day plan.\n"
            ),
            Category::Wish => format!(
                "These are items on my wish list:\n{items_list}\n\n\
                 Help me turn realistic ones into goals, with budgeting/time planning.\n"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalItem {
    pub goal_item_id: GoalItemId,
    pub category: Category,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub owned_by: UserId,
}

/// Plain-text rendering of an item list for prompt building. Items appear
/// in the order given (newest first when coming from the repository).
pub fn render_items(items: &[GoalItem]) -> String {
    if items.is_empty() {
        "(no items yet)".to_string()
    } else {
        items
            .iter()
            .map(|item| format!("- {}", item.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
