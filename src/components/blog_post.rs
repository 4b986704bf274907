use log::debug;

use crate::types::{BlogPost, PageSeoOverride};
use crate::utils::escape_html;

/// Component for rendering one blog post page body
pub struct BlogPostComponent;

impl BlogPostComponent {
    /// Create a new blog post component
    pub fn new() -> Self {
        Self
    }

    /// SEO overrides for a post: the post title and the description with
    /// the excerpt as fallback. The article flag keeps its default; post
    /// pages carry no og:type entry.
    pub fn seo_override(&self, post: &BlogPost) -> PageSeoOverride {
        let description = post
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&post.excerpt);
        PageSeoOverride::new(&post.title).with_description(description)
    }

    /// Render the post body: title heading, byline, featured image, then
    /// the post HTML.
    ///
    /// `post.html_body` is inserted verbatim. The markdown renderer that
    /// produced it is the trust boundary for untrusted content; nothing is
    /// sanitized here.
    pub fn render(&self, post: &BlogPost) -> String {
        debug!("Rendering blog post '{}'", post.title);

        let mut html = String::new();
        html.push_str("<div class=\"post-content\">");
        html.push_str(&format!(
            "<h1 class=\"post-header\">{}</h1>",
            escape_html(&post.title)
        ));
        html.push_str(&format!(
            "<h3 class=\"post-date\">{} - {}</h3>",
            escape_html(&post.publish_date),
            escape_html(&post.reading_time_text)
        ));
        html.push_str("<div class=\"featured-image\">");
        html.push_str(&post.featured_image.render("Featured image"));
        html.push_str("</div>");
        html.push_str("<div class=\"markdown-content\">");
        html.push_str(&post.html_body);
        html.push_str("</div>");
        html.push_str("</div>");
        html
    }
}

impl Default for BlogPostComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageHandle;

    fn test_post() -> BlogPost {
        BlogPost {
            html_body: "<p>Body <strong>text</strong></p>".to_string(),
            excerpt: "Short summary".to_string(),
            title: "My Post".to_string(),
            publish_date: "12 August, 2019".to_string(),
            description: None,
            featured_image: ImageHandle::new("/images/post.jpg"),
            reading_time_text: "4 min read".to_string(),
        }
    }

    #[test]
    fn excerpt_used_when_description_empty() {
        let component = BlogPostComponent::new();

        let mut post = test_post();
        post.description = Some(String::new());
        let overrides = component.seo_override(&post);
        assert_eq!(overrides.description.as_deref(), Some("Short summary"));

        post.description = None;
        let overrides = component.seo_override(&post);
        assert_eq!(overrides.description.as_deref(), Some("Short summary"));
    }

    #[test]
    fn description_wins_when_present() {
        let mut post = test_post();
        post.description = Some("Real description".to_string());
        let overrides = BlogPostComponent::new().seo_override(&post);
        assert_eq!(overrides.description.as_deref(), Some("Real description"));
        assert_eq!(overrides.title, "My Post");
    }

    #[test]
    fn seo_override_leaves_article_flag_unset() {
        let overrides = BlogPostComponent::new().seo_override(&test_post());
        assert!(!overrides.is_article);
    }

    #[test]
    fn renders_sections_in_fixed_order() {
        let html = BlogPostComponent::new().render(&test_post());
        let heading = html.find("<h1 class=\"post-header\">My Post</h1>").unwrap();
        let byline = html.find("12 August, 2019 - 4 min read").unwrap();
        let image = html.find("<div class=\"featured-image\">").unwrap();
        let body = html.find("<p>Body <strong>text</strong></p>").unwrap();
        assert!(heading < byline && byline < image && image < body);
    }

    #[test]
    fn body_html_is_inserted_verbatim() {
        let mut post = test_post();
        post.html_body = "<script>alert(1)</script>".to_string();
        let html = BlogPostComponent::new().render(&post);
        assert!(html.contains("<script>alert(1)</script>"));
    }
}
