//! # HomeBlog Content Store
//!
//! HomeBlog keeps a small blog's content in plain files: one JSON document per blog
//! record (comments embedded), and one markdown file per authored post. This crate
//! is that storage core. Rendering pages and wiring HTTP routes are somebody else's
//! job; they talk to [`api::BlogApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs, print.rs)                        │
//! │  - Parses arguments, loads config, installs logging, prints │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates caller input, dispatches, returns Rust values  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands / Index / Posts                                   │
//! │  - records, comments, seed, metadata listing, markdown      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Codecs (codec.rs)                 │
//! │  - BlogStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees and Non-Guarantees
//!
//! - A record round-trips field for field, comment order included.
//! - Listings are rebuilt from disk on every call and cannot go stale.
//! - Single writer assumed: concurrent read-modify-write on one record can lose
//!   an update (last write wins). There is no locking.
//! - Not-found is `Ok(None)`; a corrupt file is treated as absent; I/O failures
//!   are errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade
//! - [`commands`]: Record, comment and seeding logic
//! - [`index`]: Metadata listing
//! - [`posts`]: Markdown post store
//! - [`store`]: Storage trait and implementations
//! - [`codec`]: JSON and front matter encodings
//! - [`model`]: Data types
//! - [`session`]: Login sessions
//! - [`clock`]: Injectable date and id sources
//! - [`config`], [`logging`], [`error`]

pub mod api;
pub mod clock;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod posts;
pub mod session;
pub mod store;
