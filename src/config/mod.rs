/// Style family a glyph is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconStyle {
    Brand,
    Solid,
}

impl IconStyle {
    /// CSS class prefix for this style family
    pub fn prefix(&self) -> &'static str {
        match self {
            IconStyle::Brand => "fab",
            IconStyle::Solid => "fas",
        }
    }
}

/// One social-media profile entry. Sequence position is identity:
/// insertion order is rendering order.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub name: String,
    pub style: IconStyle,
    pub icon: String,
    pub icon_class: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: &str, style: IconStyle, icon: &str, icon_class: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            style,
            icon: icon.to_string(),
            icon_class: icon_class.to_string(),
            url: url.to_string(),
        }
    }
}

/// Site-wide configuration snapshot. Built once before any component
/// renders and read-only afterwards; components take it by reference.
#[derive(Debug, Clone)]
pub struct SiteMetadata {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub site_url: String,
    pub image: String,
    pub twitter_username: String,
    pub social_media: Vec<SocialLink>,
}

impl SiteMetadata {
    /// Create the site's default configuration
    pub fn new() -> Self {
        Self {
            title: "Shane Myrick".to_string(),
            subtitle: "Software Developer and Fitness Coach".to_string(),
            description: "Shane Myrick's personal site and blogs".to_string(),
            author: "@shanemyrick".to_string(),
            site_url: "https://shanemyrick.com".to_string(),
            image: "/images/site-icon.png".to_string(),
            twitter_username: "@shanemyrick".to_string(),
            social_media: vec![
                SocialLink::new(
                    "GitHub",
                    IconStyle::Brand,
                    "github",
                    "github",
                    "https://github.com/smyrick",
                ),
                SocialLink::new(
                    "Twitter",
                    IconStyle::Brand,
                    "twitter",
                    "twitter",
                    "https://twitter.com/shanemyrick",
                ),
                SocialLink::new(
                    "LinkedIn",
                    IconStyle::Brand,
                    "linkedin",
                    "linkedin",
                    "https://www.linkedin.com/in/shanemyrick/",
                ),
                SocialLink::new(
                    "e-mail",
                    IconStyle::Solid,
                    "envelope",
                    "mail",
                    "mailto:mail@shanemyrick.com",
                ),
            ],
        }
    }

    /// Create configuration with custom identity values, keeping the
    /// caller-supplied social links
    pub fn with_custom(
        title: &str,
        subtitle: &str,
        description: &str,
        author: &str,
        site_url: &str,
        image: &str,
        twitter_username: &str,
        social_media: Vec<SocialLink>,
    ) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            author: author.to_string(),
            site_url: site_url.to_string(),
            image: image.to_string(),
            twitter_username: twitter_username.to_string(),
            social_media,
        }
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self::new()
    }
}
