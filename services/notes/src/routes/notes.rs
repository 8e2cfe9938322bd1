//! Note handlers, all scoped to the authenticated user

use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    error::{AppError, AppResult},
    forms::NoteForm,
    middleware::CurrentUser,
    models::NoteFields,
    state::AppState,
    validation::FieldErrors,
    views,
};

/// Parse the `{note_id}` path segment; anything but an integer is a missing page
pub fn parse_note_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    let notes = state.note_repository.list_for_user(user.id).await?;

    Ok(Html(views::notes_page(&user.username, &notes)))
}

/// GET /create
pub async fn create_form(Extension(user): Extension<CurrentUser>) -> impl IntoResponse {
    Html(views::note_form_page(
        &user.username,
        "New note",
        "/create",
        &NoteForm::default(),
        &FieldErrors::new(),
    ))
}

/// POST /create
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<NoteForm>,
) -> AppResult<Response> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let page = views::note_form_page(&user.username, "New note", "/create", &form, &errors);
            return Ok(Html(page).into_response());
        }
    };

    state.note_repository.create(user.id, &fields).await?;

    Ok(Redirect::to("/").into_response())
}

/// GET /edit/{note_id}
pub async fn edit_form(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(note_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note_id = parse_note_id(&note_id)?;
    let note = state
        .note_repository
        .find_for_user(note_id, user.id)
        .await?
        .ok_or(AppError::NotFound)?;

    let form = NoteForm::from(NoteFields::from(&note));
    Ok(Html(views::note_form_page(
        &user.username,
        "Edit note",
        &format!("/edit/{}", note.id),
        &form,
        &FieldErrors::new(),
    )))
}

/// POST /edit/{note_id}
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(note_id): Path<String>,
    Form(form): Form<NoteForm>,
) -> AppResult<Response> {
    let note_id = parse_note_id(&note_id)?;
    state
        .note_repository
        .find_for_user(note_id, user.id)
        .await?
        .ok_or(AppError::NotFound)?;

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let page = views::note_form_page(
                &user.username,
                "Edit note",
                &format!("/edit/{}", note_id),
                &form,
                &errors,
            );
            return Ok(Html(page).into_response());
        }
    };

    state
        .note_repository
        .update_for_user(note_id, user.id, &fields)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Redirect::to("/").into_response())
}

/// GET /delete/{note_id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(note_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note_id = parse_note_id(&note_id)?;
    let deleted = state
        .note_repository
        .delete_for_user(note_id, user.id)
        .await?;

    if deleted {
        Ok(Redirect::to("/"))
    } else {
        Err(AppError::NotFound)
    }
}
