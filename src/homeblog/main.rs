use clap::Parser;
use homeblog::api::BlogApi;
use homeblog::config::BlogConfig;
use homeblog::error::{BlogError, Result};
use homeblog::logging::{init_logging, LogFormat};
use homeblog::model::{NewComment, NewPost};
use homeblog::posts::PostStore;
use homeblog::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = apply_overrides(BlogConfig::load_from(&cwd)?, &cli);

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let format = if config.json_logs() {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(level, format)?;

    let mut api = BlogApi::new(
        FileStore::new(config.data_dir.clone()),
        PostStore::new(config.posts_dir.clone()),
    );

    // Seeding happens before anything else reads or writes the store.
    let seeded = if config.seed_sample_data {
        Some(api.seed_if_empty()?)
    } else {
        None
    };

    match cli.command {
        Some(Commands::Seed) => {
            let report = match seeded {
                Some(report) => report,
                None => api.seed_if_empty()?,
            };
            print::print_seed_report(&report);
            Ok(())
        }
        Some(Commands::List { json }) => handle_list(&api, json),
        Some(Commands::Show { id, json }) => handle_show(&api, &id, json),
        Some(Commands::Create {
            title,
            excerpt,
            author,
        }) => {
            let record = api.create_record(&title, &excerpt, &author)?;
            print::print_success(&format!("Created blog record '{}'", record.id));
            Ok(())
        }
        Some(Commands::Comment {
            id,
            author,
            email,
            content,
        }) => {
            let comment = api
                .append_comment(&id, NewComment::new(author, email, content))?
                .ok_or_else(|| not_found("blog record", &id))?;
            print::print_success(&format!("Added {} to '{}'", comment.id, id));
            Ok(())
        }
        Some(Commands::Comments { id, json }) => {
            let comments = api.list_comments(&id)?;
            if json {
                print::print_json(&comments)
            } else {
                print::print_comments(&comments);
                Ok(())
            }
        }
        Some(Commands::Posts { json }) => {
            let posts = api.list_posts()?;
            if json {
                print::print_json(&posts)
            } else {
                print::print_posts(&posts);
                Ok(())
            }
        }
        Some(Commands::Post { slug, html }) => {
            let post = api
                .get_post(&slug)?
                .ok_or_else(|| not_found("post", &slug))?;
            print::print_post(&post, html);
            Ok(())
        }
        Some(Commands::NewPost {
            title,
            excerpt,
            content,
        }) => {
            let post = api.create_post(&NewPost::new(title, excerpt, content))?;
            print::print_success(&format!("Created post '{}'", post.slug));
            Ok(())
        }
        Some(Commands::Read { slug }) => {
            let article = api
                .find_article(&slug)?
                .ok_or_else(|| not_found("article", &slug))?;
            print::print_article(&article);
            Ok(())
        }
        None => handle_list(&api, false),
    }
}

fn apply_overrides(mut config: BlogConfig, cli: &Cli) -> BlogConfig {
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &cli.posts_dir {
        config.posts_dir = dir.clone();
    }
    if cli.no_seed {
        config.seed_sample_data = false;
    }
    config
}

fn handle_list(api: &BlogApi<FileStore>, json: bool) -> Result<()> {
    let entries = api.list_metadata()?;
    if json {
        return print::print_json(&entries);
    }
    print::print_metadata(&entries);
    Ok(())
}

fn handle_show(api: &BlogApi<FileStore>, id: &str, json: bool) -> Result<()> {
    let record = api
        .get_record(id)?
        .ok_or_else(|| not_found("blog record", id))?;
    if json {
        return print::print_json(&record);
    }
    print::print_record(&record);
    Ok(())
}

fn not_found(kind: &str, id: &str) -> BlogError {
    BlogError::NotFound(format!("{} '{}'", kind, id))
}
