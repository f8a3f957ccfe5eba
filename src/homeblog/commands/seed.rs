use crate::error::Result;
use crate::model::{BlogRecord, Comment};
use crate::store::BlogStore;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Number of sample records written. Zero when the store already had content.
    pub written: usize,
}

impl SeedReport {
    pub fn seeded(&self) -> bool {
        self.written > 0
    }
}

/// Writes the sample records if, and only if, the store holds nothing at all.
///
/// Any entry counts as content, including files that are not records, so this
/// never overwrites anything.
pub fn seed_if_empty<S: BlogStore>(store: &mut S) -> Result<SeedReport> {
    if !store.is_empty()? {
        debug!("store already populated, skipping sample data");
        return Ok(SeedReport::default());
    }

    let samples = sample_records();
    for record in &samples {
        store.put_record(record)?;
    }
    info!(count = samples.len(), "seeded sample blog records");
    Ok(SeedReport {
        written: samples.len(),
    })
}

fn sample(
    id: &str,
    title: &str,
    excerpt: &str,
    author: &str,
    date: &str,
    comment: (&str, &str, &str, &str),
) -> BlogRecord {
    let (comment_id, comment_author, email, content) = comment;
    let mut record = BlogRecord::new(id, title, excerpt, author, date);
    record.comments.push(Comment {
        id: comment_id.to_string(),
        author: comment_author.to_string(),
        email: email.to_string(),
        content: content.to_string(),
        date: date.to_string(),
    });
    record
}

pub fn sample_records() -> Vec<BlogRecord> {
    vec![
        sample(
            "ai-in-2026",
            "AI in 2026: The Year of Practical Intelligence",
            "Exploring the advancements and practical applications of artificial intelligence in 2026.",
            "Sarah Chen",
            "2026-02-04",
            (
                "comment-1",
                "Alex Mitchell",
                "alex@example.com",
                "Great insights into the future of AI. Really looking forward to seeing these developments.",
            ),
        ),
        sample(
            "cancer-and-medical",
            "Cancer Research: Breakthrough Therapies of 2026",
            "Latest developments in cancer treatment and immunotherapy showing promising results.",
            "Dr. James Rivera",
            "2026-02-03",
            (
                "comment-2",
                "Maria Santos",
                "maria@example.com",
                "This gives me hope. Thank you for sharing these important updates.",
            ),
        ),
        sample(
            "tesla-stock-report",
            "Tesla Stock Report Q1 2026: Growth and Innovation",
            "Analysis of Tesla's financial performance and upcoming product launches.",
            "Michael Chen",
            "2026-02-02",
            (
                "comment-3",
                "David Park",
                "david@example.com",
                "Interesting analysis. The upcoming models look very promising.",
            ),
        ),
        sample(
            "trumps-tariffs",
            "Understanding Global Tariffs and Trade Policy in 2026",
            "Impact analysis of new trade policies on global markets and supply chains.",
            "Economic Times",
            "2026-02-01",
            (
                "comment-4",
                "Emma Wilson",
                "emma@example.com",
                "Very comprehensive analysis. Helps understand the complex trade dynamics.",
            ),
        ),
        sample(
            "social-media-addiction",
            "Social Media Addiction: The Digital Wellness Crisis",
            "Exploring the psychological impacts of social media and strategies for healthy digital habits.",
            "Dr. Lisa Anderson",
            "2026-01-31",
            (
                "comment-5",
                "John Thompson",
                "john@example.com",
                "This is such an important topic. We need more awareness about digital wellness.",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::list_metadata;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_empty_store() {
        let mut store = InMemoryStore::new();
        let report = seed_if_empty(&mut store).unwrap();
        assert_eq!(report.written, 5);
        assert!(report.seeded());

        let listed = list_metadata(&store).unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].id, "ai-in-2026");
        assert_eq!(listed[4].id, "social-media-addiction");
        assert!(listed.iter().all(|m| m.comment_count == 1));
    }

    #[test]
    fn seeding_twice_matches_seeding_once() {
        let mut once = InMemoryStore::new();
        seed_if_empty(&mut once).unwrap();

        let mut twice = InMemoryStore::new();
        seed_if_empty(&mut twice).unwrap();
        let second = seed_if_empty(&mut twice).unwrap();

        assert!(!second.seeded());
        assert_eq!(once.record_ids().unwrap(), twice.record_ids().unwrap());
        for id in once.record_ids().unwrap() {
            assert_eq!(once.raw(&id), twice.raw(&id));
        }
    }

    #[test]
    fn any_existing_entry_blocks_seeding() {
        let mut store = InMemoryStore::new();
        store.insert_raw("unrelated.txt", "hello");
        let report = seed_if_empty(&mut store).unwrap();
        assert_eq!(report, SeedReport::default());
        assert!(store.record_ids().unwrap().is_empty());
    }

    #[test]
    fn sample_ids_are_unique() {
        let mut ids: Vec<String> = sample_records().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
