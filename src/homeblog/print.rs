use colored::Colorize;
use homeblog::commands::seed::SeedReport;
use homeblog::error::Result;
use homeblog::model::{Article, BlogMetadata, BlogRecord, Comment, MarkdownPost};
use serde::Serialize;

const RULE: &str = "--------------------------------";

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_seed_report(report: &SeedReport) {
    if report.seeded() {
        print_success(&format!("Seeded {} sample records.", report.written));
    } else {
        println!("{}", "Data directory already has content; nothing seeded.".dimmed());
    }
}

pub fn print_metadata(entries: &[BlogMetadata]) {
    if entries.is_empty() {
        println!("No blog records found.");
        return;
    }
    for meta in entries {
        let comments = match meta.comment_count {
            1 => "1 comment".to_string(),
            n => format!("{} comments", n),
        };
        println!(
            "{}  {}  {}",
            meta.date.dimmed(),
            meta.title.bold(),
            format!("({}, {})", meta.id, comments).dimmed()
        );
        if !meta.excerpt.is_empty() {
            println!("            {}", meta.excerpt);
        }
    }
}

pub fn print_record(record: &BlogRecord) {
    println!("{}", record.title.bold());
    println!("{} · {}", record.author, record.date.dimmed());
    println!("{}", RULE);
    if !record.excerpt.is_empty() {
        println!("{}", record.excerpt);
        println!();
    }
    print_comments(&record.comments);
}

pub fn print_comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("{}", "No comments yet.".dimmed());
        return;
    }
    for comment in comments {
        println!(
            "{} {} {}",
            comment.author.yellow(),
            format!("<{}>", comment.email).dimmed(),
            comment.date.dimmed()
        );
        println!("  {}", comment.content);
    }
}

pub fn print_posts(posts: &[MarkdownPost]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }
    for post in posts {
        println!(
            "{}  {}  {}",
            post.date.dimmed(),
            post.title.bold(),
            format!("({})", post.slug).dimmed()
        );
        if !post.excerpt.is_empty() {
            println!("            {}", post.excerpt);
        }
    }
}

pub fn print_post(post: &MarkdownPost, html: bool) {
    println!("{}", post.title.bold());
    match &post.author {
        Some(author) => println!("{} · {}", author, post.date.dimmed()),
        None => println!("{}", post.date.dimmed()),
    }
    println!("{}", RULE);
    if html {
        print!("{}", post.render_html());
    } else {
        print!("{}", post.content);
    }
}

pub fn print_article(article: &Article) {
    match article {
        Article::Post(post) => print_post(post, false),
        Article::Record(record) => print_record(record),
    }
}
