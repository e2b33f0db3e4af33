// Route path constants - single source of truth for all site paths

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub const INDEX: &str = "/";
pub const EDUCATION: &str = "/education";
pub const SKILLS: &str = "/skills";
pub const RESPONSIBILITIES: &str = "/responsibilities";
pub const ACHIEVEMENTS: &str = "/achievements";
pub const CONTACT: &str = "/contact";
pub const DOWNLOAD_RESUME: &str = "/download_resume";

pub const STATIC_PREFIX: &str = "/static";
pub const RESUME_FILE: &str = "/static/files/resume.pdf";

/// Assemble the full site router: six page routes, the resume redirect,
/// and the static-file service. Any other path gets axum's default 404.
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(INDEX, get(handlers::index_handler))
        .route(EDUCATION, get(handlers::education_handler))
        .route(SKILLS, get(handlers::skills_handler))
        .route(RESPONSIBILITIES, get(handlers::responsibilities_handler))
        .route(ACHIEVEMENTS, get(handlers::achievements_handler))
        .route(CONTACT, get(handlers::contact_handler))
        .route(DOWNLOAD_RESUME, get(handlers::download_resume_handler))
        .nest_service(STATIC_PREFIX, static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
