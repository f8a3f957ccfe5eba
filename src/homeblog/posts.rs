//! # Markdown Posts
//!
//! Posts authored as `<slug>.md` files with YAML front matter. This store reads
//! them by slug, lists them newest first, and can write a new one. There are no
//! comments on markdown posts; those belong to blog records.

use crate::clock::Clock;
use crate::codec::{decode_post, encode_post};
use crate::error::{BlogError, Result};
use crate::model::{format_date, parse_date, slugify, MarkdownPost, NewPost};
use crate::store::is_valid_id;
use std::cmp::Reverse;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const POST_EXT: &str = ".md";

pub struct PostStore {
    root: PathBuf,
}

impl PostStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}{}", slug, POST_EXT))
    }

    /// Reads one post. Missing files and undecodable front matter are absent.
    pub fn get(&self, clock: &dyn Clock, slug: &str) -> Result<Option<MarkdownPost>> {
        if !is_valid_id(slug) {
            return Ok(None);
        }
        let path = self.post_path(slug);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BlogError::Io(e)),
        };
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring non-UTF-8 markdown post");
                return Ok(None);
            }
        };
        match decode_post(slug, &text, clock.today()) {
            Ok(post) => Ok(Some(post)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring undecodable markdown post");
                Ok(None)
            }
        }
    }

    /// Every readable post, newest first. Ties keep slug order.
    pub fn list(&self, clock: &dyn Clock) -> Result<Vec<MarkdownPost>> {
        let mut posts = Vec::new();
        for slug in self.slugs()? {
            if let Some(post) = self.get(clock, &slug)? {
                posts.push(post);
            }
        }
        posts.sort_by_key(|post| Reverse(parse_date(&post.date)));
        Ok(posts)
    }

    /// Slugs of every `.md` file, sorted.
    pub fn slugs(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BlogError::Io(e)),
        };

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(BlogError::Io)?;
            if !entry.file_type().map_err(BlogError::Io)?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(slug) = name.to_str().and_then(|n| n.strip_suffix(POST_EXT)) {
                if is_valid_id(slug) {
                    slugs.push(slug.to_string());
                }
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    /// Writes a new post dated today. Refuses to replace an existing file.
    pub fn create(&self, clock: &dyn Clock, input: &NewPost) -> Result<MarkdownPost> {
        let mut problems = Vec::new();
        if input.title.trim().is_empty() {
            problems.push("Title is required".to_string());
        }
        if input.excerpt.trim().is_empty() {
            problems.push("Excerpt is required".to_string());
        }
        if input.content.trim().is_empty() {
            problems.push("Content is required".to_string());
        }
        if !problems.is_empty() {
            return Err(BlogError::Validation(problems));
        }

        let slug = slugify(&input.title);
        if slug.is_empty() {
            return Err(BlogError::InvalidInput(format!(
                "title {:?} does not produce a usable slug",
                input.title
            )));
        }

        fs::create_dir_all(&self.root).map_err(BlogError::Io)?;

        let date = format_date(clock.today());
        let text = encode_post(&input.title, &date, &input.excerpt, &input.content)?;
        let path = self.post_path(&slug);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(BlogError::PostExists(slug))
            }
            Err(e) => return Err(BlogError::Io(e)),
        };
        file.write_all(text.as_bytes()).map_err(BlogError::Io)?;

        info!(slug = %slug, "created markdown post");
        decode_post(&slug, &text, clock.today())
    }
}
