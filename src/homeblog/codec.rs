//! # Record Codecs
//!
//! Two on-disk encodings live here:
//!
//! - **Blog records** are pretty-printed JSON (2-space indent) with the same field
//!   names as [`BlogRecord`]. Encoding is deterministic: the same record always
//!   produces the same bytes. Unknown fields are ignored on decode and a missing or
//!   `null` `comments` field reads as an empty list.
//!
//! - **Markdown posts** are a YAML front matter block fenced by `---` lines, a blank
//!   line, and the raw body:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2026-02-04
//! excerpt: A first post
//! ---
//!
//! Body text...
//! ```
//!
//! Decoding never panics; structurally invalid input comes back as `Err` and the
//! callers decide whether that means "absent" or "skip".

use crate::error::Result;
use crate::model::{format_date, parse_date, BlogRecord, MarkdownPost};
use chrono::NaiveDate;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";
const UNTITLED: &str = "Untitled";

pub fn encode_record(record: &BlogRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Decodes raw file bytes. Invalid UTF-8 is a decode error like any other bad JSON.
pub fn decode_record(bytes: &[u8]) -> Result<BlogRecord> {
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
    date: &'a str,
    excerpt: &'a str,
}

/// Renders a markdown post file. The body is written verbatim, newline-terminated.
pub fn encode_post(title: &str, date: &str, excerpt: &str, body: &str) -> Result<String> {
    let front = serde_yaml::to_string(&FrontMatter {
        title,
        date,
        excerpt,
    })?;
    let mut out = format!("{DELIMITER}\n{front}{DELIMITER}\n\n{body}");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Parses a markdown post. `today` fills in a missing date.
pub fn decode_post(slug: &str, text: &str, today: NaiveDate) -> Result<MarkdownPost> {
    let (front, body) = split_front_matter(text);
    let meta = match front {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<Mapping>(yaml)?,
        _ => Mapping::new(),
    };

    let title = text_field(&meta, "title")
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());
    let excerpt = text_field(&meta, "excerpt").unwrap_or_default();
    let author = text_field(&meta, "author").filter(|a| !a.is_empty());
    let date = match text_field(&meta, "date").filter(|d| !d.is_empty()) {
        Some(raw) => parse_date(&raw).map(format_date).unwrap_or(raw),
        None => format_date(today),
    };

    Ok(MarkdownPost {
        slug: slug.to_string(),
        title,
        date,
        excerpt,
        author,
        content: body.to_string(),
    })
}

fn text_field(meta: &Mapping, key: &str) -> Option<String> {
    match meta.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Splits `text` into (front matter, body). Without a terminated opening fence the
/// whole text is body.
fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(rest) = text
        .strip_prefix("---\r\n")
        .or_else(|| text.strip_prefix("---\n"))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let body = &rest[offset + line.len()..];
            let body = body
                .strip_prefix("\r\n")
                .or_else(|| body.strip_prefix('\n'))
                .unwrap_or(body);
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }
    (None, text)
}
