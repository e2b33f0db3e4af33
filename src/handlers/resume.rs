use crate::routes;
use axum::http::{StatusCode, header, header::HeaderMap};

/// GET /download_resume handler - redirect to the static resume file
///
/// Answers 302 Found with a `Location` pointing into the static tree.
/// The file itself is environment-provided; if it is absent the
/// static-file service produces the 404, not this handler. Built by
/// hand because axum's `Redirect` only offers 303/307/308.
pub async fn download_resume_handler() -> (StatusCode, HeaderMap) {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        header::HeaderValue::from_static(routes::RESUME_FILE),
    );

    tracing::debug!("Redirecting to {}", routes::RESUME_FILE);
    (StatusCode::FOUND, headers)
}
