use log::debug;

use crate::config::SiteMetadata;
use crate::types::{PageSeoOverride, ResolvedSeo};
use crate::utils::{escape_attr, join_url};

/// Component that merges per-page SEO overrides with the site defaults and
/// projects the result into head meta tags
pub struct SeoComponent;

impl SeoComponent {
    /// Create a new SEO component
    pub fn new() -> Self {
        Self
    }

    /// Resolve the effective SEO values for one page.
    ///
    /// Pure function of its three inputs: no hidden state, no I/O, the same
    /// inputs always produce the same output. Recomputed on every render;
    /// nothing is cached.
    pub fn resolve(
        &self,
        overrides: &PageSeoOverride,
        site: &SiteMetadata,
        current_path: &str,
    ) -> ResolvedSeo {
        debug!("Resolving SEO for path '{}'", current_path);

        let title = if overrides.title.is_empty() {
            site.title.clone()
        } else {
            overrides.title.clone()
        };

        let description = overrides
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&site.description)
            .to_string();

        ResolvedSeo {
            title,
            // "%s" is substituted by the page template, not here
            title_template: format!("%s | {}", site.title),
            description,
            image_url: join_url(&site.site_url, &site.image),
            canonical_url: join_url(&site.site_url, current_path),
            twitter_username: site.twitter_username.clone(),
            is_article: overrides.is_article,
        }
    }

    /// Render the head meta tags for a resolved SEO set.
    ///
    /// Optional entries are emitted only when their value is non-empty; an
    /// absent value produces no tag at all rather than an empty one.
    /// `og:type=article` appears exactly when the page is an article.
    pub fn render_meta_tags(&self, seo: &ResolvedSeo) -> String {
        let mut html = String::new();

        push_named_meta(&mut html, "description", &seo.description);
        push_named_meta(&mut html, "image", &seo.image_url);
        push_property_meta(&mut html, "og:url", &seo.canonical_url);
        if seo.is_article {
            push_property_meta(&mut html, "og:type", "article");
        }
        push_property_meta(&mut html, "og:title", &seo.title);
        push_property_meta(&mut html, "og:description", &seo.description);
        push_property_meta(&mut html, "og:image", &seo.image_url);
        push_named_meta(&mut html, "twitter:card", "summary_large_image");
        push_named_meta(&mut html, "twitter:creator", &seo.twitter_username);
        push_named_meta(&mut html, "twitter:title", &seo.title);
        push_named_meta(&mut html, "twitter:description", &seo.description);
        push_named_meta(&mut html, "twitter:image", &seo.image_url);

        html
    }

    /// Apply the title template to the resolved title, producing the text
    /// for the document `<title>` element
    pub fn apply_title_template(&self, seo: &ResolvedSeo) -> String {
        seo.title_template.replacen("%s", &seo.title, 1)
    }
}

fn push_named_meta(html: &mut String, name: &str, content: &str) {
    if !content.is_empty() {
        html.push_str(&format!(
            "<meta name=\"{}\" content=\"{}\">",
            name,
            escape_attr(content)
        ));
    }
}

fn push_property_meta(html: &mut String, property: &str, content: &str) {
    if !content.is_empty() {
        html.push_str(&format!(
            "<meta property=\"{}\" content=\"{}\">",
            property,
            escape_attr(content)
        ));
    }
}

impl Default for SeoComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_site() -> SiteMetadata {
        SiteMetadata::with_custom(
            "Shane Myrick",
            "",
            "Personal site",
            "@shanemyrick",
            "https://x.com",
            "/img.png",
            "@shanemyrick",
            Vec::new(),
        )
    }

    #[test]
    fn empty_override_title_falls_back_to_site_title() {
        let seo = SeoComponent::new().resolve(&PageSeoOverride::new(""), &test_site(), "/");
        assert_eq!(seo.title, "Shane Myrick");
    }

    #[test]
    fn non_empty_override_title_wins() {
        let seo = SeoComponent::new().resolve(&PageSeoOverride::new("Hello"), &test_site(), "/");
        assert_eq!(seo.title, "Hello");
    }

    #[test]
    fn resolves_all_fields_from_override_and_site() {
        let seo = SeoComponent::new().resolve(
            &PageSeoOverride::new("Hello"),
            &test_site(),
            "/hello",
        );
        assert_eq!(seo.title, "Hello");
        assert_eq!(seo.title_template, "%s | Shane Myrick");
        assert_eq!(seo.description, "Personal site");
        assert_eq!(seo.image_url, "https://x.com/img.png");
        assert_eq!(seo.canonical_url, "https://x.com/hello");
    }

    #[test]
    fn empty_override_description_falls_back_to_site_description() {
        let overrides = PageSeoOverride::new("Hello").with_description("");
        let seo = SeoComponent::new().resolve(&overrides, &test_site(), "/");
        assert_eq!(seo.description, "Personal site");
    }

    #[test]
    fn resolve_is_deterministic() {
        let component = SeoComponent::new();
        let overrides = PageSeoOverride::new("Hello").with_description("d").article();
        let site = test_site();
        let first = component.resolve(&overrides, &site, "/p");
        let second = component.resolve(&overrides, &site, "/p");
        assert_eq!(first, second);
        assert_eq!(
            component.render_meta_tags(&first),
            component.render_meta_tags(&second)
        );
    }

    #[test]
    fn og_type_emitted_exactly_once_for_articles_only() {
        let component = SeoComponent::new();
        let site = test_site();

        let page = component.resolve(&PageSeoOverride::new("Hello"), &site, "/");
        assert!(!component.render_meta_tags(&page).contains("og:type"));

        let article = component.resolve(&PageSeoOverride::new("Hello").article(), &site, "/");
        let html = component.render_meta_tags(&article);
        assert_eq!(html.matches("og:type").count(), 1);
        assert!(html.contains("<meta property=\"og:type\" content=\"article\">"));
    }

    #[test]
    fn absent_optional_values_produce_no_tags() {
        let mut site = test_site();
        site.twitter_username.clear();
        site.description.clear();
        site.image.clear();
        site.site_url.clear();
        let seo = SeoComponent::new().resolve(&PageSeoOverride::new("Hello"), &site, "");
        let html = SeoComponent::new().render_meta_tags(&seo);
        assert!(!html.contains("twitter:creator"));
        assert!(!html.contains("name=\"description\""));
        assert!(!html.contains("og:image"));
        assert!(!html.contains("content=\"\""));
        // card and title survive
        assert!(html.contains("twitter:card"));
        assert!(html.contains("og:title"));
    }

    #[test]
    fn title_template_substitution() {
        let component = SeoComponent::new();
        let seo = component.resolve(&PageSeoOverride::new("Hello"), &test_site(), "/");
        assert_eq!(component.apply_title_template(&seo), "Hello | Shane Myrick");
    }
}
