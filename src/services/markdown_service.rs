use std::path::Path;

use log::{debug, info};
use pulldown_cmark::{html, Event, Options, Parser};
use time::format_description;
use time::Date;

use crate::errors::SiteError;
use crate::types::{BlogPost, ImageHandle};

/// Words-per-minute rate used for the reading-time estimate
const READING_WORDS_PER_MINUTE: usize = 200;

/// Maximum excerpt length in characters; pruning happens at a word boundary
const EXCERPT_PRUNE_LENGTH: usize = 160;

/// One markdown source file turned into a renderable post plus the route
/// path its frontmatter declares
#[derive(Debug, Clone)]
pub struct PostDocument {
    pub post: BlogPost,
    pub route_path: String,
}

/// Frontmatter fields recognized in post sources
#[derive(Debug, Default)]
struct Frontmatter {
    title: Option<String>,
    date: Option<String>,
    path: Option<String>,
    description: Option<String>,
    featured_image: Option<String>,
}

/// Service that turns markdown post sources into [`BlogPost`] values.
///
/// This is the markdown-processing collaborator the rendering components
/// consume: it owns frontmatter parsing, body rendering, excerpt pruning,
/// reading-time estimation, and date formatting. The only I/O in the crate
/// lives in [`MarkdownService::from_file`].
pub struct MarkdownService;

impl MarkdownService {
    /// Create a new markdown service
    pub fn new() -> Self {
        Self
    }

    /// Load and process one markdown source file
    pub fn from_file(&self, path: &Path) -> Result<PostDocument, SiteError> {
        debug!("Processing markdown file: {:?}", path);
        let source = std::fs::read_to_string(path)?;
        self.from_source(&source)
    }

    /// Process one markdown post source
    pub fn from_source(&self, source: &str) -> Result<PostDocument, SiteError> {
        let (front, body) = split_frontmatter(source);

        let title = front
            .title
            .ok_or_else(|| SiteError::FrontmatterError("missing 'title' field".to_string()))?;

        let html_body = render_body(body);
        let plain = plain_text(body);
        let excerpt = prune_excerpt(&plain, EXCERPT_PRUNE_LENGTH);
        let reading_time_text = reading_time_text(&plain);
        let publish_date = front
            .date
            .as_deref()
            .map(format_publish_date)
            .transpose()?
            .unwrap_or_default();

        let featured_image = ImageHandle::new(front.featured_image.as_deref().unwrap_or(""));

        info!("Processed post '{}' ({})", title, reading_time_text);

        Ok(PostDocument {
            post: BlogPost {
                html_body,
                excerpt,
                title,
                publish_date,
                description: front.description,
                featured_image,
                reading_time_text,
            },
            route_path: front.path.unwrap_or_default(),
        })
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the markdown body to HTML
fn render_body(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(body, options));
    out
}

/// Collect the plain text of the body, for excerpts and reading time
fn plain_text(body: &str) -> String {
    let mut out = String::new();
    for ev in Parser::new_ext(body, Options::empty()) {
        match ev {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(_) => {
                if !out.ends_with(' ') && !out.is_empty() {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Prune text to at most `max_len` characters at a word boundary, appending
/// an ellipsis when anything was cut
fn prune_excerpt(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let mut kept = String::new();
    for word in text.split_whitespace() {
        let candidate_len = if kept.is_empty() {
            word.chars().count()
        } else {
            kept.chars().count() + 1 + word.chars().count()
        };
        if candidate_len > max_len {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
    }
    kept.push('…');
    kept
}

/// Reading-time estimate in the "N min read" form, rounding up
fn reading_time_text(text: &str) -> String {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(READING_WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// Format an ISO "YYYY-MM-DD" frontmatter date as "DD Month, YYYY"
fn format_publish_date(raw: &str) -> Result<String, SiteError> {
    let iso = format_description::parse("[year]-[month]-[day]")
        .map_err(|e| SiteError::FrontmatterError(format!("bad date format description: {}", e)))?;
    let date = Date::parse(raw.trim(), &iso)
        .map_err(|e| SiteError::FrontmatterError(format!("bad date '{}': {}", raw, e)))?;
    let display = format_description::parse("[day] [month repr:long], [year]")
        .map_err(|e| SiteError::FrontmatterError(format!("bad date format description: {}", e)))?;
    date.format(&display)
        .map_err(|e| SiteError::FrontmatterError(format!("cannot format date '{}': {}", raw, e)))
}

/// Extract the frontmatter block and return it with the remaining body
fn split_frontmatter(raw: &str) -> (Frontmatter, &str) {
    let mut front = Frontmatter::default();
    if !raw.starts_with("---\n") && !raw.starts_with("---\r\n") {
        return (front, raw);
    }

    let after_open = &raw[raw.find('\n').map(|i| i + 1).unwrap_or(raw.len())..];
    let Some(close) = after_open.find("\n---") else {
        return (front, raw);
    };

    for line in after_open[..close].lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let mut value = value.trim();
        if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
            || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
        {
            value = &value[1..value.len() - 1];
        }
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "title" => front.title = Some(value.to_string()),
            "date" => front.date = Some(value.to_string()),
            "path" => front.path = Some(value.to_string()),
            "description" => front.description = Some(value.to_string()),
            "featuredImage" => front.featured_image = Some(value.to_string()),
            _ => {}
        }
    }

    // Body starts on the line after the closing delimiter
    let rest = &after_open[close + 1..];
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => "",
    };
    (front, body)
}
