//! Static HTML pages and their no-cache policy.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{Html, Response},
};

const INDEX_HTML: &str = include_str!("../pages/index.html");
const ROOM_HTML: &str = include_str!("../pages/room.html");

/// RFC 7231 IMF-fixdate
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub const CACHE_CONTROL_VALUE: &str =
    "no-store, no-cache, must-revalidate, post-check=0, pre-check=0, max-age=0";

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /room
pub async fn room() -> Html<&'static str> {
    Html(ROOM_HTML)
}

/// Marks every page response as already stale.
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_no_cache_headers(response.headers_mut());
    response
}

pub fn apply_no_cache_headers(headers: &mut HeaderMap) {
    let now = chrono::Utc::now().format(HTTP_DATE_FORMAT).to_string();
    if let Ok(value) = HeaderValue::from_str(&now) {
        headers.insert(header::LAST_MODIFIED, value);
    }

    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_VALUE),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("-1"));
}
