use std::fs;
use std::path::Path;

use log::debug;

use crate::components::blog_post::BlogPostComponent;
use crate::components::icon::IconLibrary;
use crate::components::landing_bio::LandingBioComponent;
use crate::components::seo::SeoComponent;
use crate::config::SiteMetadata;
use crate::errors::SiteError;
use crate::types::{BlogPost, PageSeoOverride, ResolvedSeo};
use crate::utils::escape_html;

/// Component that assembles complete HTML pages from resolved SEO values
/// and a rendered body
pub struct TemplateComponent {
    seo: SeoComponent,
}

impl TemplateComponent {
    /// Create a new template component
    pub fn new() -> Self {
        Self {
            seo: SeoComponent::new(),
        }
    }

    /// Render a full HTML document for one page.
    ///
    /// Loads the base shell template when one is present on disk,
    /// otherwise falls back to a built-in shell. Placeholders: {{TITLE}},
    /// {{META}}, {{CONTENT}}.
    pub fn render_page(&self, seo: &ResolvedSeo, content: &str) -> Result<String, SiteError> {
        let title = escape_html(&self.seo.apply_title_template(seo));
        let meta = self.seo.render_meta_tags(seo);

        // Try to load the base template from a few likely locations
        let possible_paths = [
            "static/html/base.html",
            "./static/html/base.html",
            "../static/html/base.html",
        ];

        for path_str in &possible_paths {
            if let Ok(base) = fs::read_to_string(Path::new(path_str)) {
                debug!("Rendering page '{}' with template {}", seo.title, path_str);
                let html = base
                    .replace("{{TITLE}}", &title)
                    .replace("{{META}}", &meta)
                    .replace("{{CONTENT}}", content);
                return Ok(html);
            }
        }

        // Fallback inline shell
        Ok(format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title>{}<link rel=\"stylesheet\" href=\"/static/css/site.css\"></head><body><main class=\"content\">{}</main></body></html>",
            title, meta, content
        ))
    }

    /// Assemble the landing page: site-title SEO over the bio block
    pub fn render_landing_page(
        &self,
        site: &SiteMetadata,
        library: &IconLibrary,
    ) -> Result<String, SiteError> {
        let overrides = PageSeoOverride::new("Home");
        let seo = self.seo.resolve(&overrides, site, "/");
        let bio = LandingBioComponent::new().render(site, library);
        self.render_page(&seo, &bio)
    }

    /// Assemble one blog post page at the given route path
    pub fn render_blog_post_page(
        &self,
        post: &BlogPost,
        site: &SiteMetadata,
        current_path: &str,
    ) -> Result<String, SiteError> {
        let component = BlogPostComponent::new();
        let seo = self.seo.resolve(&component.seo_override(post), site, current_path);
        let body = component.render(post);
        self.render_page(&seo, &body)
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}
