//! Loam - a personal portfolio and blog page renderer
//!
//! This crate renders the pages of a personal site: a landing page with a
//! name/subtitle header and a row of social-media icons, and blog-post pages
//! with SEO head metadata, a byline, a featured image, and a markdown body.
//! Every component is a pure, synchronous projection from in-memory inputs
//! to HTML; serving or writing the output is the caller's job.

pub mod components;
pub mod config;
pub mod errors;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{IconStyle, SiteMetadata, SocialLink};
pub use errors::SiteError;
pub use types::{BlogPost, ImageHandle, PageSeoOverride, ResolvedSeo};
pub use services::{MarkdownService, PostDocument};
pub use components::{
    BlogPostComponent, IconComponent, IconLibrary, LandingBioComponent, SeoComponent,
    TemplateComponent,
};

// Re-export utility functions
pub use utils::{escape_attr, escape_html, join_url};
