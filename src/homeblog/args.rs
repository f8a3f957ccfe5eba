use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "homeblog", version)]
#[command(
    about = "Manage a flat-file blog: records, comments and markdown posts",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding blog record JSON files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding markdown posts
    #[arg(long, global = true, value_name = "DIR")]
    pub posts_dir: Option<PathBuf>,

    /// Do not seed sample records into an empty data directory
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed sample records if the data directory is empty
    Seed,

    /// List blog records, newest first
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one blog record with its comments
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Create a blog record; the id is derived from the title
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        excerpt: String,

        #[arg(long)]
        author: String,
    },

    /// Add a comment to a blog record
    Comment {
        id: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        content: String,
    },

    /// List the comments of a blog record
    Comments {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// List markdown posts, newest first
    Posts {
        #[arg(long)]
        json: bool,
    },

    /// Show one markdown post
    Post {
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Write a new markdown post
    NewPost {
        #[arg(long)]
        title: String,

        #[arg(long)]
        excerpt: String,

        #[arg(long)]
        content: String,
    },

    /// Open whatever a slug resolves to (markdown post first, then blog record)
    Read { slug: String },
}
