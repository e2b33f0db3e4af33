use crate::error::PageError;
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// Every template the site renders. Checked against the template
/// directory at startup so a missing page aborts before the listener
/// binds.
pub const TEMPLATES: &[&str] = &[
    "index.html",
    "education.html",
    "skills.html",
    "responsibilities.html",
    "achievements.html",
    "contact.html",
];

/// Render one page template with its `active` navigation marker.
fn render_page(state: &AppState, template: &str, active: &str) -> Result<Html<String>, PageError> {
    let html = state.templates.render(template, active)?;
    tracing::debug!("Rendered {} (active: {})", template, active);
    Ok(Html(html))
}

/// GET / handler - home page
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_page(&state, "index.html", "home")
}

/// GET /education handler
pub async fn education_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_page(&state, "education.html", "education")
}

/// GET /skills handler
pub async fn skills_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_page(&state, "skills.html", "skills")
}

/// GET /responsibilities handler
pub async fn responsibilities_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    render_page(&state, "responsibilities.html", "responsibilities")
}

/// GET /achievements handler
pub async fn achievements_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    render_page(&state, "achievements.html", "achievements")
}

/// GET /contact handler
pub async fn contact_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render_page(&state, "contact.html", "contact")
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::routes;
    use crate::state::AppState;
    use crate::templates::TemplateEngine;
    use axum::{Router, body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config::from_vars(|_| None).unwrap();

        let template_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
        let templates = TemplateEngine::load(template_dir, super::TEMPLATES).unwrap();

        let state = AppState {
            templates: Arc::new(templates),
            config: Arc::new(config),
        };

        routes::router(state)
    }

    async fn get_body(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = get_body(setup_test_app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="page-home""#));
        assert!(body.contains(r#"data-active="home""#));
    }

    #[tokio::test]
    async fn test_each_page_route_renders_with_active_marker() {
        let cases = [
            ("/education", "education"),
            ("/skills", "skills"),
            ("/responsibilities", "responsibilities"),
            ("/achievements", "achievements"),
            ("/contact", "contact"),
        ];

        for (path, active) in cases {
            let (status, body) = get_body(setup_test_app(), path).await;

            assert_eq!(status, StatusCode::OK, "unexpected status for {}", path);
            assert!(
                body.contains(&format!(r#"id="page-{}""#, active)),
                "missing page marker for {}",
                path
            );
            assert!(
                body.contains(&format!(r#"data-active="{}""#, active)),
                "missing active marker for {}",
                path
            );
        }
    }

    #[tokio::test]
    async fn test_active_nav_entry_is_highlighted() {
        let (_, body) = get_body(setup_test_app(), "/skills").await;

        assert!(body.contains(r#"class="active" href="/skills""#));
        assert!(!body.contains(r#"class="active" href="/contact""#));
    }

    #[tokio::test]
    async fn test_rendering_is_idempotent() {
        let (_, first) = get_body(setup_test_app(), "/achievements").await;
        let (_, second) = get_body(setup_test_app(), "/achievements").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_undefined_path_returns_404() {
        let (status, _) = get_body(setup_test_app(), "/no-such-page").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
