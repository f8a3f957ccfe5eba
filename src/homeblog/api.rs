//! # API Facade
//!
//! The single entry point the web layer (or the bundled CLI) talks to. It
//! dispatches to [`crate::commands`], [`crate::index`] and [`crate::posts`] and
//! returns plain Rust values; it never prints.
//!
//! ## Boundary Validation
//!
//! Caller input is checked here and nowhere deeper. `append_comment` rejects blank
//! author/email/content with [`BlogError::Validation`] before the store is touched.
//!
//! ## Absent Values
//!
//! - `get_record` / `get_post` / `find_article`: `Ok(None)` when nothing matches.
//! - `append_comment`: `Ok(None)` when the parent record does not exist.
//! - `list_comments`: an empty list when the parent record does not exist.
//!
//! ## Generic Over BlogStore
//!
//! - Production: `BlogApi<FileStore>`
//! - Testing: `BlogApi<InMemoryStore>`, usually with a fixed clock and sequential ids.

use crate::clock::{Clock, IdSource, RandomIds, SystemClock};
use crate::commands::{self, seed::SeedReport};
use crate::error::{BlogError, Result};
use crate::index;
use crate::model::{
    Article, BlogMetadata, BlogRecord, Comment, MarkdownPost, NewComment, NewPost,
};
use crate::posts::PostStore;
use crate::store::BlogStore;

pub struct BlogApi<S: BlogStore> {
    store: S,
    posts: PostStore,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl<S: BlogStore> BlogApi<S> {
    pub fn new(store: S, posts: PostStore) -> Self {
        Self {
            store,
            posts,
            clock: Box::new(SystemClock),
            ids: Box::new(RandomIds),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_record(&self, id: &str) -> Result<Option<BlogRecord>> {
        commands::records::get(&self.store, id)
    }

    pub fn put_record(&mut self, record: &BlogRecord) -> Result<()> {
        commands::records::put(&mut self.store, record)
    }

    pub fn create_record(
        &mut self,
        title: &str,
        excerpt: &str,
        author: &str,
    ) -> Result<BlogRecord> {
        commands::records::create(&mut self.store, self.clock.as_ref(), title, excerpt, author)
    }

    pub fn list_metadata(&self) -> Result<Vec<BlogMetadata>> {
        index::list_metadata(&self.store)
    }

    pub fn append_comment(
        &mut self,
        blog_id: &str,
        input: NewComment,
    ) -> Result<Option<Comment>> {
        let problems = input.problems();
        if !problems.is_empty() {
            return Err(BlogError::Validation(problems));
        }
        commands::comments::append(
            &mut self.store,
            self.clock.as_ref(),
            self.ids.as_mut(),
            blog_id,
            input,
        )
    }

    pub fn list_comments(&self, blog_id: &str) -> Result<Vec<Comment>> {
        commands::comments::list(&self.store, blog_id)
    }

    pub fn seed_if_empty(&mut self) -> Result<SeedReport> {
        commands::seed::seed_if_empty(&mut self.store)
    }

    pub fn get_post(&self, slug: &str) -> Result<Option<MarkdownPost>> {
        self.posts.get(self.clock.as_ref(), slug)
    }

    pub fn list_posts(&self) -> Result<Vec<MarkdownPost>> {
        self.posts.list(self.clock.as_ref())
    }

    pub fn create_post(&self, input: &NewPost) -> Result<MarkdownPost> {
        self.posts.create(self.clock.as_ref(), input)
    }

    /// Resolves a slug the way the blog page does: markdown posts shadow records.
    pub fn find_article(&self, slug: &str) -> Result<Option<Article>> {
        if let Some(post) = self.get_post(slug)? {
            return Ok(Some(Article::Post(post)));
        }
        Ok(self.get_record(slug)?.map(Article::Record))
    }

    /// Every slug a reader can open: markdown posts first, then blog records.
    pub fn article_slugs(&self) -> Result<Vec<String>> {
        let mut slugs: Vec<String> = self
            .list_posts()?
            .into_iter()
            .map(|post| post.slug)
            .collect();
        slugs.extend(self.list_metadata()?.into_iter().map(|meta| meta.id));
        Ok(slugs)
    }
}
