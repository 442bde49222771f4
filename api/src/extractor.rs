use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use kernel::model::auth::SessionId;
use kernel::model::id::UserId;
use kernel::model::user::User;
use registry::AppRegistry;
use shared::error::AppError;

pub const SESSION_COOKIE: &str = "goals_session";

/// The authenticated principal, resolved from the session cookie.
pub struct AuthorizedUser {
    pub session_id: SessionId,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }
}

pub enum AuthRejection {
    // anonymous or stale session: send the browser to the login form
    RedirectToLogin,
    Error(AppError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::RedirectToLogin => Redirect::to("/login").into_response(),
            AuthRejection::Error(e) => e.into_response(),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or(AuthRejection::RedirectToLogin)?;
        let session_id = SessionId::from(cookie.value().to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_session(&session_id)
            .await
            .map_err(AuthRejection::Error)?
            .ok_or(AuthRejection::RedirectToLogin)?;

        // A session without a backing record is an application-level fault.
        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await
            .map_err(AuthRejection::Error)?
            .ok_or_else(|| AuthRejection::Error(AppError::EntityNotFound("User not found.".into())))?;

        Ok(Self { session_id, user })
    }
}
