/// Per-page SEO overrides, merged with the site defaults at render time.
/// Never persisted; built fresh for every page.
#[derive(Debug, Clone)]
pub struct PageSeoOverride {
    pub title: String,
    pub description: Option<String>,
    pub is_article: bool,
}

impl PageSeoOverride {
    /// Create an override with just a title (no description, not an article)
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            is_article: false,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn article(mut self) -> Self {
        self.is_article = true;
        self
    }
}

/// The final, page-specific set of meta-tag values after merging site
/// defaults and per-page overrides. Derived fresh on every render;
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSeo {
    pub title: String,
    pub title_template: String,
    pub description: String,
    pub image_url: String,
    pub canonical_url: String,
    pub twitter_username: String,
    pub is_article: bool,
}

/// Opaque handle to a pre-processed responsive image. Produced by the
/// image-processing collaborator; this crate forwards it into markup and
/// never inspects or transforms pixel data.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub src: String,
    pub srcset: String,
    pub sizes: String,
}

impl ImageHandle {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_string(),
            srcset: String::new(),
            sizes: String::new(),
        }
    }

    /// Render the fluid image markup for this handle
    pub fn render(&self, alt: &str) -> String {
        let mut html = String::new();
        html.push_str("<img src=\"");
        html.push_str(&crate::utils::escape_attr(&self.src));
        html.push('"');
        if !self.srcset.is_empty() {
            html.push_str(&format!(
                " srcset=\"{}\"",
                crate::utils::escape_attr(&self.srcset)
            ));
        }
        if !self.sizes.is_empty() {
            html.push_str(&format!(
                " sizes=\"{}\"",
                crate::utils::escape_attr(&self.sizes)
            ));
        }
        html.push_str(&format!(" alt=\"{}\">", crate::utils::escape_attr(alt)));
        html
    }
}

/// One blog post as produced by markdown processing, read-only to the
/// rendering components
#[derive(Debug, Clone)]
pub struct BlogPost {
    /// Rendered body HTML, inserted verbatim into the page. The markdown
    /// renderer upstream is the trust boundary; no sanitization happens
    /// downstream of it.
    pub html_body: String,
    pub excerpt: String,
    pub title: String,
    /// Pre-formatted publish date, e.g. "12 August, 2019"
    pub publish_date: String,
    pub description: Option<String>,
    pub featured_image: ImageHandle,
    /// Pre-computed reading time, e.g. "4 min read"
    pub reading_time_text: String,
}
