//! Inline HTML pages
//!
//! Every user-supplied string passes through [`html_escape`] before it is
//! interpolated.

use crate::{
    forms::{LoginForm, NoteForm, RegistrationForm},
    models::Note,
    validation::FieldErrors,
};

const CSS_STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; background: #f5f5f5; margin: 0; }
nav { background: #333; color: #fff; padding: 12px 24px; display: flex; gap: 16px; align-items: center; }
nav a { color: #fff; }
nav .user { margin-left: auto; }
.container { max-width: 640px; margin: 32px auto; background: #fff; padding: 24px 32px; border-radius: 8px; }
.field { margin-bottom: 16px; }
.field label { display: block; font-weight: 600; margin-bottom: 4px; }
.field input, .field textarea { width: 100%; padding: 8px; box-sizing: border-box; }
.field textarea { min-height: 160px; }
.error { color: #c62828; font-size: 0.9em; }
.notice { background: #e3f2fd; border-left: 4px solid #1976d2; padding: 8px 12px; margin-bottom: 16px; }
.note { border-bottom: 1px solid #eee; padding: 12px 0; }
.note pre { white-space: pre-wrap; font-family: inherit; }
"#;

pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, username: Option<&str>, notice: Option<&str>, body: &str) -> String {
    let nav = match username {
        Some(username) => format!(
            r#"<a href="/">My notes</a><a href="/create">New note</a><span class="user">{} &middot; <a href="/logout">Log out</a></span>"#,
            html_escape(username)
        ),
        None => r#"<a href="/login">Log in</a><a href="/register">Register</a>"#.to_string(),
    };
    let notice = notice
        .map(|n| format!(r#"<div class="notice">{}</div>"#, html_escape(n)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Notes</title>
    <style>{}</style>
</head>
<body>
    <nav>{}</nav>
    <div class="container">
        {}
        {}
    </div>
</body>
</html>"#,
        html_escape(title),
        CSS_STYLES,
        nav,
        notice,
        body
    )
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|message| format!(r#"<div class="error">{}</div>"#, html_escape(message)))
        .unwrap_or_default()
}

fn text_input(name: &str, label: &str, kind: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <input type="{kind}" id="{name}" name="{name}" value="{value}" required>
            {error}
        </div>"#,
        name = name,
        label = label,
        kind = kind,
        value = html_escape(value),
        error = field_error(errors, name),
    )
}

/// Login page
pub fn login_page(form: &LoginForm, errors: &FieldErrors, notice: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Log in</h1>
        <form method="post" action="/login">
            {}
            {}
            <button type="submit">Log in</button>
        </form>
        <p>No account yet? <a href="/register">Register</a></p>"#,
        text_input("username", "Username", "text", &form.username, errors),
        text_input("password", "Password", "password", "", errors),
    );
    layout("Log in", None, notice, &body)
}

/// Registration page
pub fn register_page(form: &RegistrationForm, errors: &FieldErrors) -> String {
    let body = format!(
        r#"<h1>Register</h1>
        <form method="post" action="/register">
            {}
            {}
            <button type="submit">Register</button>
        </form>
        <p>Already registered? <a href="/login">Log in</a></p>"#,
        text_input("username", "Username", "text", &form.username, errors),
        text_input("password", "Password", "password", "", errors),
    );
    layout("Register", None, None, &body)
}

/// Note listing for the current user
pub fn notes_page(username: &str, notes: &[Note]) -> String {
    let items = if notes.is_empty() {
        "<p>You have no notes yet.</p>".to_string()
    } else {
        notes
            .iter()
            .map(|note| {
                format!(
                    r#"<div class="note">
            <h2>{title}</h2>
            <pre>{content}</pre>
            <a href="/edit/{id}">Edit</a> <a href="/delete/{id}">Delete</a>
        </div>"#,
                    id = note.id,
                    title = html_escape(&note.title),
                    content = html_escape(&note.content),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<h1>My notes</h1>
        <p><a href="/create">New note</a></p>
        {}"#,
        items
    );
    layout("My notes", Some(username), None, &body)
}

/// Create or edit form for a note
pub fn note_form_page(
    username: &str,
    heading: &str,
    action: &str,
    form: &NoteForm,
    errors: &FieldErrors,
) -> String {
    let body = format!(
        r#"<h1>{heading}</h1>
        <form method="post" action="{action}">
            {title}
            <div class="field">
                <label for="content">Content</label>
                <textarea id="content" name="content" required>{content}</textarea>
                {content_error}
            </div>
            <button type="submit">Save</button>
            <a href="/">Cancel</a>
        </form>"#,
        heading = html_escape(heading),
        action = html_escape(action),
        title = text_input("title", "Title", "text", &form.title, errors),
        content = html_escape(&form.content),
        content_error = field_error(errors, "content"),
    );
    layout(heading, Some(username), None, &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        None,
        None,
        r#"<h1>Not found</h1><p>The requested page does not exist.</p><a href="/">Back to my notes</a>"#,
    )
}

pub fn error_page() -> String {
    layout(
        "Error",
        None,
        None,
        "<h1>Something went wrong</h1><p>Please try again later.</p>",
    )
}
