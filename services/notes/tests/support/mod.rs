#![allow(dead_code)]

use anyhow::Result;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::database::{DatabaseConfig, init_pool, run_migrations};
use notes::{AppState, Settings, create_router};
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub state: AppState,
    pub app: axum::Router,
}

pub async fn build_test_context() -> Result<TestContext> {
    build_test_context_with(Settings::default()).await
}

pub async fn build_test_context_with(settings: Settings) -> Result<TestContext> {
    let temp_dir = tempfile::tempdir()?;
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}", temp_dir.path().join("notes.db").display()),
        max_connections: 1,
    };

    let pool = init_pool(&config).await?;
    run_migrations(&pool).await?;

    let state = AppState::new(pool, settings);
    let app = create_router(state.clone());

    Ok(TestContext {
        temp_dir,
        state,
        app,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub set_cookies: Vec<String>,
    pub body: String,
}

impl TestResponse {
    /// `name=value` pair of a cookie set by this response, if any
    pub fn cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .find(|c| c.starts_with(&prefix))
            .map(|c| c.split(';').next().unwrap_or_default().to_string())
    }

    pub fn session_cookie(&self) -> Option<String> {
        self.cookie("session")
    }

    pub fn assert_redirect_to(&self, location: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location.as_deref(), Some(location));
    }
}

pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    form: Option<&[(&str, &str)]>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = match form {
        Some(fields) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields.iter())
                .finish()
        }
        None => String::new(),
    };

    let req = builder
        .body(Body::from(body))
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");

    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let set_cookies = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    TestResponse {
        status,
        location,
        set_cookies,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(app: &axum::Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    send(app, "GET", uri, cookie, None).await
}

pub async fn post_form(
    app: &axum::Router,
    uri: &str,
    cookie: Option<&str>,
    fields: &[(&str, &str)],
) -> TestResponse {
    send(app, "POST", uri, cookie, Some(fields)).await
}

pub async fn register(app: &axum::Router, username: &str, password: &str) -> TestResponse {
    post_form(
        app,
        "/register",
        None,
        &[("username", username), ("password", password)],
    )
    .await
}

pub async fn login(app: &axum::Router, username: &str, password: &str) -> TestResponse {
    post_form(
        app,
        "/login",
        None,
        &[("username", username), ("password", password)],
    )
    .await
}

/// Register and log in, returning the session cookie
pub async fn register_and_login(app: &axum::Router, username: &str, password: &str) -> String {
    register(app, username, password)
        .await
        .assert_redirect_to("/login");
    let resp = login(app, username, password).await;
    resp.assert_redirect_to("/");
    resp.session_cookie().expect("login should set a session cookie")
}

pub async fn count_rows(ctx: &TestContext, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&sql)
        .fetch_one(&ctx.state.db_pool)
        .await
        .expect("count query should succeed")
}
