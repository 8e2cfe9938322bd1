//! Registration, login and logout handlers

use axum::{
    Extension, Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, info, warn};

use crate::{
    error::{AppError, AppResult},
    flash::{self, Notice},
    forms::{LoginForm, RegistrationForm},
    middleware::{CurrentUser, LOGIN_PATH},
    models::NewUser,
    password,
    session,
    state::AppState,
    validation::FieldErrors,
    views,
};

/// Shown for an unknown username and a wrong password alike
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Shown when registration hits an existing username
pub const USERNAME_TAKEN: &str = "Username is already taken";

/// GET /login
pub async fn login_form(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take(jar);
    let page = views::login_page(
        &LoginForm::default(),
        &FieldErrors::new(),
        notice.map(Notice::message),
    );
    (jar, Html(page))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return Ok(Html(views::login_page(&form, &errors, None)).into_response()),
    };

    info!("Login attempt for user: {}", credentials.username);

    let user = state
        .user_repository
        .find_by_username(&credentials.username)
        .await?;

    let authenticated = match user {
        Some(user) => {
            let verified = password::verify_password(&credentials.password, &user.password_hash)
                .map_err(AppError::Internal)?;
            verified.then_some(user)
        }
        None => {
            password::verify_dummy(&credentials.password);
            None
        }
    };

    let Some(user) = authenticated else {
        warn!("Failed login for user: {}", credentials.username);
        let page = views::login_page(&form, &FieldErrors::new(), Some(INVALID_CREDENTIALS));
        return Ok(Html(page).into_response());
    };

    if let Err(e) = state.session_manager.cleanup_expired_sessions().await {
        error!("Failed to clean up expired sessions: {}", e);
    }

    let token = state.session_manager.create_session(user.id).await?;
    let cookie = session::session_cookie(
        token,
        state.session_manager.ttl_seconds(),
        &state.settings.session,
    );

    info!("User {} logged in", user.username);
    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

/// GET /logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    state.session_manager.delete_session(user.session_id).await?;

    info!("User {} logged out", user.username);
    Ok((
        jar.remove(session::removal_cookie()),
        Redirect::to(LOGIN_PATH),
    ))
}

/// GET /register
pub async fn register_form() -> impl IntoResponse {
    Html(views::register_page(
        &RegistrationForm::default(),
        &FieldErrors::new(),
    ))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegistrationForm>,
) -> AppResult<Response> {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return Ok(Html(views::register_page(&form, &errors)).into_response()),
    };

    let password_hash =
        password::hash_password(&credentials.password).map_err(AppError::Internal)?;

    let new_user = NewUser {
        username: credentials.username,
        password_hash,
    };

    match state.user_repository.create(&new_user).await {
        Ok(user) => {
            info!("Registered user {} ({})", user.username, user.id);
            Ok((flash::set(jar, Notice::Registered), Redirect::to(LOGIN_PATH)).into_response())
        }
        Err(e) if e.is_unique_violation() => {
            warn!("Registration rejected, username taken: {}", new_user.username);
            let mut errors = FieldErrors::new();
            errors.add("username", USERNAME_TAKEN);
            Ok(Html(views::register_page(&form, &errors)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
