//! One-shot notices carried across a redirect
//!
//! The cookie holds a short code rather than the message text, so nothing a
//! client sends back can be injected into a page.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Registered,
}

impl Notice {
    fn code(self) -> &'static str {
        match self {
            Notice::Registered => "registered",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "registered" => Some(Notice::Registered),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Registered => "Registration successful! You can now log in.",
        }
    }
}

/// Queue `notice` for the next rendered page
pub fn set(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, notice.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Pop the pending notice, if any
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let notice = Notice::from_code(cookie.value());

    (jar.remove(Cookie::build(FLASH_COOKIE).path("/").build()), notice)
}
