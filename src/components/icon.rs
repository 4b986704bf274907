use std::collections::HashSet;
use std::sync::OnceLock;

use log::debug;

use crate::config::{IconStyle, SocialLink};
use crate::utils::escape_attr;

/// Immutable table of the glyphs available to the icon renderer, keyed by
/// (style family, icon id). Built once by [`IconLibrary::build`]; the
/// process-wide instance behind [`IconLibrary::global`] is initialized at
/// most once no matter how many callers race to it.
pub struct IconLibrary {
    glyphs: HashSet<(IconStyle, String)>,
}

/// Brand glyphs shipped with the site
const BRAND_GLYPHS: &[&str] = &[
    "github",
    "twitter",
    "linkedin",
    "facebook",
    "instagram",
    "youtube",
    "mastodon",
    "gitlab",
    "stack-overflow",
];

/// Solid glyphs shipped with the site
const SOLID_GLYPHS: &[&str] = &["envelope", "rss", "link", "user", "home"];

impl IconLibrary {
    /// Build the glyph table. Pure: same output every call, no global
    /// mutation.
    pub fn build() -> Self {
        let mut glyphs = HashSet::new();
        for id in BRAND_GLYPHS {
            glyphs.insert((IconStyle::Brand, id.to_string()));
        }
        for id in SOLID_GLYPHS {
            glyphs.insert((IconStyle::Solid, id.to_string()));
        }
        debug!("Built icon library with {} glyphs", glyphs.len());
        Self { glyphs }
    }

    /// Process-wide library instance
    pub fn global() -> &'static IconLibrary {
        static LIBRARY: OnceLock<IconLibrary> = OnceLock::new();
        LIBRARY.get_or_init(IconLibrary::build)
    }

    /// Whether a glyph is registered for the given style and id
    pub fn contains(&self, style: IconStyle, icon: &str) -> bool {
        self.glyphs.contains(&(style, icon.to_string()))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Component for rendering one social-media link as a clickable icon
pub struct IconComponent;

impl IconComponent {
    /// Create a new icon component
    pub fn new() -> Self {
        Self
    }

    /// Render one social link as an anchor wrapping an icon glyph.
    ///
    /// The anchor opens in a new browsing context and carries both
    /// `noopener` and `noreferrer`, so the opened page gets neither a
    /// window back-reference nor a referrer. An unknown or empty icon id
    /// renders a glyph-less element rather than failing.
    pub fn render(&self, library: &IconLibrary, link: &SocialLink) -> String {
        debug!("Rendering icon '{}' for '{}'", link.icon, link.name);

        let glyph_classes = if library.contains(link.style, &link.icon) {
            format!(" {} fa-{} fa-3x", link.style.prefix(), link.icon)
        } else {
            String::new()
        };

        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><i class=\"icons {}{}\" title=\"{}\" aria-label=\"{}\" role=\"img\"></i></a>",
            escape_attr(&link.url),
            escape_attr(&link.icon_class),
            glyph_classes,
            escape_attr(&link.name),
            escape_attr(&link.name),
        )
    }
}

impl Default for IconComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_link() -> SocialLink {
        SocialLink::new(
            "GitHub",
            IconStyle::Brand,
            "github",
            "github",
            "https://github.com/x",
        )
    }

    #[test]
    fn library_initialization_is_idempotent() {
        let first = IconLibrary::global().len();
        let second = IconLibrary::global().len();
        assert_eq!(first, second);
        assert_eq!(IconLibrary::build().len(), first);
    }

    #[test]
    fn glyph_lookup_is_keyed_by_style_and_id() {
        let library = IconLibrary::build();
        assert!(library.contains(IconStyle::Brand, "github"));
        assert!(library.contains(IconStyle::Solid, "envelope"));
        assert!(!library.contains(IconStyle::Solid, "github"));
        assert!(!library.contains(IconStyle::Brand, "envelope"));
    }

    #[test]
    fn renders_isolated_anchor_with_accessible_label() {
        let html = IconComponent::new().render(IconLibrary::global(), &github_link());
        assert!(html.starts_with("<a href=\"https://github.com/x\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("aria-label=\"GitHub\""));
        assert!(html.contains("fab fa-github"));
    }

    #[test]
    fn empty_link_renders_degenerate_icon_without_failing() {
        let link = SocialLink::new("", IconStyle::Brand, "", "", "");
        let html = IconComponent::new().render(IconLibrary::global(), &link);
        assert!(html.starts_with("<a href=\"\""));
        assert!(html.contains("<i class=\"icons \""));
        assert!(!html.contains("fa-3x"));
    }

    #[test]
    fn unknown_glyph_gets_no_glyph_classes() {
        let link = SocialLink::new(
            "Mystery",
            IconStyle::Brand,
            "not-a-glyph",
            "mystery",
            "https://example.com",
        );
        let html = IconComponent::new().render(IconLibrary::global(), &link);
        assert!(html.contains("class=\"icons mystery\""));
        assert!(!html.contains("fa-not-a-glyph"));
    }
}
