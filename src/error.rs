use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Custom error type for page handlers
///
/// The only failure a handler can hit is the template engine refusing to
/// render; everything else (unknown paths, missing static files) is
/// answered by the router and the static-file service directly.
#[derive(Debug)]
pub enum PageError {
    /// Template rendering failure
    Render(tera::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let message = match &self {
            PageError::Render(err) => {
                tracing::error!("Template render error: {}", err);
                "Internal Server Error"
            }
        };

        let body = format!(
            "<!doctype html><html><head><title>500</title></head>\
             <body><h1>500</h1><p>{}</p></body></html>",
            message
        );

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

impl From<tera::Error> for PageError {
    fn from(err: tera::Error) -> Self {
        PageError::Render(err)
    }
}
