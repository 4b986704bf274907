pub mod markdown_service;

pub use markdown_service::{MarkdownService, PostDocument};
