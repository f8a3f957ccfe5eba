//! Injectable sources of "now" and of fresh identifiers.
//!
//! Comment creation and session issuance both need a date and a unique id. Taking
//! them through these traits keeps the command layer deterministic under test.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs in simple (dashless) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// `prefix1`, `prefix2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("s");
        assert_eq!(ids.next_id(), "s1");
        assert_eq!(ids.next_id(), "s2");
    }

    #[test]
    fn random_ids_do_not_repeat() {
        let mut ids = RandomIds;
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
