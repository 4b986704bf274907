use log::debug;

use crate::components::icon::{IconComponent, IconLibrary};
use crate::config::SiteMetadata;
use crate::utils::escape_html;

/// Component for the landing page bio: name header, subtitle, and one icon
/// per configured social-media link
pub struct LandingBioComponent {
    icon: IconComponent,
}

impl LandingBioComponent {
    /// Create a new landing bio component
    pub fn new() -> Self {
        Self {
            icon: IconComponent::new(),
        }
    }

    /// Render the bio block from the site snapshot. Icons appear in the
    /// same order as `site.social_media`.
    pub fn render(&self, site: &SiteMetadata, library: &IconLibrary) -> String {
        debug!(
            "Rendering landing bio with {} social links",
            site.social_media.len()
        );

        let mut html = String::new();
        html.push_str("<div class=\"bio-outer\"><div class=\"bio\">");
        html.push_str(&format!(
            "<h1 class=\"name-header\">{}</h1>",
            escape_html(&site.title)
        ));
        html.push_str(&format!(
            "<p class=\"description\">{}</p>",
            escape_html(&site.subtitle)
        ));

        html.push_str("<div class=\"icon-row\">");
        for link in &site.social_media {
            html.push_str("<div class=\"icon-container\">");
            html.push_str(&self.icon.render(library, link));
            html.push_str("</div>");
        }
        html.push_str("</div>");

        html.push_str("</div></div>");
        html
    }
}

impl Default for LandingBioComponent {
    fn default() -> Self {
        Self::new()
    }
}
