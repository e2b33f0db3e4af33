use anyhow::{Context as _, Result, bail};
use serde::Serialize;
use tera::Tera;

/// Context handed to every page template. `active` names the navigation
/// entry the rendered page should highlight.
#[derive(Serialize)]
struct PageContext<'a> {
    active: &'a str,
}

/// Tera engine wrapper. All templates are parsed once at startup; a
/// malformed or absent template is a configuration error, not a request
/// error.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load every `*.html` under `dir` and verify that each name in
    /// `required` is among them.
    pub fn load(dir: &str, required: &[&str]) -> Result<Self> {
        let glob = format!("{}/**/*.html", dir);
        let tera = Tera::new(&glob)
            .with_context(|| format!("failed to parse templates under '{}'", dir))?;

        for name in required {
            if !tera.get_template_names().any(|t| t == *name) {
                bail!("template '{}' not found under '{}'", name, dir);
            }
        }

        tracing::debug!("Loaded {} templates from {}", tera.get_template_names().count(), dir);
        Ok(Self { tera })
    }

    /// Render `template` with a single `active` context value.
    pub fn render(&self, template: &str, active: &str) -> tera::Result<String> {
        let context = tera::Context::from_serialize(PageContext { active })?;
        self.tera.render(template, &context)
    }
}
