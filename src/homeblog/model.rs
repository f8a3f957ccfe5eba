use chrono::{DateTime, NaiveDate};
use pulldown_cmark::{Options, Parser};
use serde::{Deserialize, Deserializer, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One reader comment, owned by exactly one [`BlogRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub email: String,
    pub content: String,
    pub date: String,
}

/// The caller-supplied part of a comment. Id and date are assigned on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub email: String,
    pub content: String,
}

impl NewComment {
    pub fn new(
        author: impl Into<String>,
        email: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            email: email.into(),
            content: content.into(),
        }
    }

    /// Returns one message per missing field; empty when the comment is acceptable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.author.trim().is_empty() {
            problems.push("Author is required".to_string());
        }
        if self.email.trim().is_empty() {
            problems.push("Email is required".to_string());
        }
        if self.content.trim().is_empty() {
            problems.push("Content is required".to_string());
        }
        problems
    }
}

/// A blog post together with its comments. Stored as one JSON file keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}

impl BlogRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            author: author.into(),
            date: date.into(),
            comments: Vec::new(),
        }
    }

    pub fn metadata(&self) -> BlogMetadata {
        BlogMetadata {
            id: self.id.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            author: self.author.clone(),
            date: self.date.clone(),
            comment_count: self.comments.len(),
        }
    }
}

// A record written with `"comments": null` reads back as having none.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Comment>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Listing projection of a [`BlogRecord`]. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogMetadata {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub comment_count: usize,
}

/// A post authored as a markdown file with front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
}

impl MarkdownPost {
    pub fn render_html(&self) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_TASKLISTS;
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, Parser::new_ext(&self.content, options));
        html
    }
}

/// Input for creating a markdown post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            content: content.into(),
        }
    }
}

/// Whatever a slug resolves to when a reader opens `/blog/<slug>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Article {
    Post(MarkdownPost),
    Record(BlogRecord),
}

impl Article {
    pub fn title(&self) -> &str {
        match self {
            Article::Post(post) => &post.title,
            Article::Record(record) => &record.title,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            Article::Post(post) => &post.date,
            Article::Record(record) => &record.date,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            Article::Post(post) => post.author.as_deref(),
            Article::Record(record) => Some(record.author.as_str()),
        }
    }
}

/// Parses a stored date string. Accepts `YYYY-MM-DD`, RFC 3339 timestamps and
/// YAML timestamps such as `2026-02-04 10:30:00`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| timestamp_date(value))
}

// A calendar date followed by `T`, `t` or whitespace and a time of day.
fn timestamp_date(value: &str) -> Option<NaiveDate> {
    let day = value.get(..10)?;
    let mut rest = value.get(10..)?.chars();
    match rest.next()? {
        'T' | 't' | ' ' | '\t' => {}
        _ => return None,
    }
    if !rest.find(|c| !c.is_whitespace())?.is_ascii_digit() {
        return None;
    }
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Derives a URL-safe slug: lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
