use std::time::Instant;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use kernel::model::goal::{event::CreateGoalItem, render_items, Category};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::AuthorizedUser;
use crate::model::goal::AddItemForm;
use crate::view;

pub async fn show_category(
    user: AuthorizedUser,
    Path(category): Path<Category>,
    State(registry): State<AppRegistry>,
) -> AppResult<Html<String>> {
    let items = registry
        .goal_repository()
        .find_by_user_and_category(user.id(), category)
        .await?;
    Ok(Html(view::category_page(category, &items, None, None)))
}

pub async fn add_item(
    user: AuthorizedUser,
    Path(category): Path<Category>,
    State(registry): State<AppRegistry>,
    Form(form): Form<AddItemForm>,
) -> AppResult<Response> {
    let event = match CreateGoalItem::new(user.id(), category, &form.text) {
        Ok(event) => event,
        Err(e) => {
            // re-render the category view with the validation message
            let items = registry
                .goal_repository()
                .find_by_user_and_category(user.id(), category)
                .await?;
            return Ok(
                Html(view::category_page(category, &items, None, Some(&e.to_string())))
                    .into_response(),
            );
        }
    };
    registry.goal_repository().create(event).await?;
    Ok(Redirect::to(&format!("/goals/{category}")).into_response())
}

pub async fn guidance(
    user: AuthorizedUser,
    Path(category): Path<Category>,
    State(registry): State<AppRegistry>,
) -> AppResult<Html<String>> {
    let items = registry
        .goal_repository()
        .find_by_user_and_category(user.id(), category)
        .await?;
    let prompt = category.guidance_prompt(&render_items(&items));

    let started = Instant::now();
    let guidance = registry.guidance_client().generate(&prompt).await;
    tracing::info!(
        category = %category,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "guidance generated"
    );

    Ok(Html(view::category_page(
        category,
        &items,
        Some(&guidance),
        None,
    )))
}
