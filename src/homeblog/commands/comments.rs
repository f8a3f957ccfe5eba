use crate::clock::{Clock, IdSource};
use crate::error::Result;
use crate::model::{format_date, Comment, NewComment};
use crate::store::BlogStore;
use tracing::info;

/// Appends a comment to the record `blog_id` and rewrites the whole record.
///
/// Returns `Ok(None)` without touching storage when the record does not exist.
pub fn append<S: BlogStore>(
    store: &mut S,
    clock: &dyn Clock,
    ids: &mut dyn IdSource,
    blog_id: &str,
    input: NewComment,
) -> Result<Option<Comment>> {
    let Some(mut record) = store.get_record(blog_id)? else {
        return Ok(None);
    };

    let comment = Comment {
        id: format!("comment-{}", ids.next_id()),
        author: input.author,
        email: input.email,
        content: input.content,
        date: format_date(clock.today()),
    };
    record.comments.push(comment.clone());
    store.put_record(&record)?;

    info!(blog_id, comment_id = %comment.id, "appended comment");
    Ok(Some(comment))
}

/// Comments of `blog_id` in insertion order.
///
/// Unlike [`crate::commands::records::get`], a missing record yields an empty
/// list rather than an absent value.
pub fn list<S: BlogStore>(store: &S, blog_id: &str) -> Result<Vec<Comment>> {
    Ok(store
        .get_record(blog_id)?
        .map(|record| record.comments)
        .unwrap_or_default())
}
