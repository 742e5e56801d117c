//! Cookie builder for the session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const AUTH_TOKEN: &str = "auth_token";

/// Cookie Max-Age in seconds (30 days, matching the token row's lifetime).
pub const AUTH_TOKEN_EXP: u64 = 2_592_000;

/// Set the session-token cookie on the jar.
///
/// No Domain attribute, so the cookie stays host-only.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use eers_api::cookie::{set_session_cookie, AUTH_TOKEN};
///
/// let jar = CookieJar::new();
/// let jar = set_session_cookie(jar, "token_value".to_string());
/// let cookie = jar.get(AUTH_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), None);
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(2_592_000)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String) -> CookieJar {
    let cookie = Cookie::build((AUTH_TOKEN, value))
        .path("/")
        .max_age(Duration::seconds(AUTH_TOKEN_EXP as i64))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
