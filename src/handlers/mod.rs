pub mod pages;
pub mod resume;

pub use pages::{
    achievements_handler, contact_handler, education_handler, index_handler,
    responsibilities_handler, skills_handler,
};
pub use resume::download_resume_handler;
