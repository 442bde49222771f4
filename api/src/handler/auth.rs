use axum::{
    extract::{RawQuery, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use kernel::model::auth::SessionId;
use kernel::model::user::event::CreateUser;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::SESSION_COOKIE;
use crate::model::auth::{LoginForm, RegisterForm};
use crate::view;

pub async fn home() -> Html<String> {
    Html(view::home_page())
}

pub async fn show_login(RawQuery(query): RawQuery) -> Html<String> {
    Html(view::login_page(query.as_deref()))
}

pub async fn show_register() -> Html<String> {
    Html(view::register_page(None))
}

pub async fn register(
    State(registry): State<AppRegistry>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let event = match CreateUser::new(&form.username, &form.password) {
        Ok(event) => event,
        Err(e) => return Html(view::register_page(Some(&e.to_string()))).into_response(),
    };
    match registry.user_repository().create(event).await {
        Ok(_) => Redirect::to("/login?registered").into_response(),
        // validation/conflict failures re-render the form with the message
        Err(e @ (AppError::UnprocessableEntity(_) | AppError::DuplicateEntity(_))) => {
            Html(view::register_page(Some(&e.to_string()))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn login(
    jar: CookieJar,
    State(registry): State<AppRegistry>,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), Redirect> {
    let session_id = try_login(&registry, &form)
        .await
        .map_err(|_| Redirect::to("/login?error"))?;

    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .build();
    Ok((jar.add(cookie), Redirect::to("/goals/LONG_TERM")))
}

async fn try_login(registry: &AppRegistry, form: &LoginForm) -> AppResult<SessionId> {
    let user_id = registry
        .auth_repository()
        .verify_user(&form.username, &form.password)
        .await?;
    registry.auth_repository().create_session(user_id).await
}

pub async fn logout(
    jar: CookieJar,
    State(registry): State<AppRegistry>,
) -> AppResult<(CookieJar, Redirect)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let session_id = SessionId::from(cookie.value().to_string());
        registry
            .auth_repository()
            .delete_session(&session_id)
            .await?;
    }
    let removal = Cookie::build(SESSION_COOKIE).path("/").build();
    Ok((jar.remove(removal), Redirect::to("/login?logout")))
}
