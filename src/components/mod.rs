pub mod blog_post;
pub mod icon;
pub mod landing_bio;
pub mod seo;
pub mod templates;

pub use blog_post::BlogPostComponent;
pub use icon::{IconComponent, IconLibrary};
pub use landing_bio::LandingBioComponent;
pub use seo::SeoComponent;
pub use templates::TemplateComponent;
