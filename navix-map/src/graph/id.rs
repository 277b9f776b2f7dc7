//! Node id generation.
//!
//! Ids look like `node_3fa2c901_17`: a prefix, a random per-generator
//! session tag, and a monotonically increasing sequence number. The session
//! tag keeps ids from two devices mapping the same floor apart; the sequence
//! keeps ids from one device unique no matter how fast nodes are captured.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default id prefix
pub const DEFAULT_ID_PREFIX: &str = "node_";

/// Sequential node id generator.
#[derive(Clone, Debug)]
pub struct NodeIdGenerator {
    prefix: String,
    session: u32,
    next: u64,
}

impl NodeIdGenerator {
    /// Create a generator with a random session tag.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_session(prefix, rand::random())
    }

    /// Create a generator with a fixed session tag.
    pub fn with_session(prefix: impl Into<String>, session: u32) -> Self {
        Self {
            prefix: prefix.into(),
            session,
            next: 0,
        }
    }

    /// Session tag embedded in every id.
    pub fn session(&self) -> u32 {
        self.session
    }

    /// Produce the next id.
    pub fn next_id(&mut self) -> String {
        let id = format_id(&self.prefix, self.session, self.next);
        self.next += 1;
        id
    }

    /// Produce the next id for which `is_taken` returns false.
    pub fn next_unused<F>(&mut self, is_taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let id = self.next_id();
            if !is_taken(&id) {
                return id;
            }
        }
    }
}

impl Default for NodeIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

fn format_id(prefix: &str, session: u32, seq: u64) -> String {
    format!("{prefix}{session:08x}_{seq}")
}

/// Process-wide id source for callers that do not own a generator.
pub(crate) fn fresh_id() -> String {
    static SESSION: OnceLock<u32> = OnceLock::new();
    static SEQ: AtomicU64 = AtomicU64::new(0);

    let session = *SESSION.get_or_init(rand::random);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format_id(DEFAULT_ID_PREFIX, session, seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut generator = NodeIdGenerator::with_session("node_", 0xabc);
        assert_eq!(generator.next_id(), "node_00000abc_0");
        assert_eq!(generator.next_id(), "node_00000abc_1");
        assert_eq!(generator.session(), 0xabc);
    }

    #[test]
    fn test_rapid_ids_unique() {
        let mut generator = NodeIdGenerator::default();
        let ids: HashSet<String> = (0..10_000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_next_unused_skips_taken() {
        let mut generator = NodeIdGenerator::with_session("n", 1);
        let taken = ["n00000001_0", "n00000001_1"];
        let id = generator.next_unused(|id| taken.contains(&id));
        assert_eq!(id, "n00000001_2");
    }

    #[test]
    fn test_fresh_id_unique() {
        let ids: HashSet<String> = (0..1_000).map(|_| fresh_id()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| id.starts_with(DEFAULT_ID_PREFIX)));
    }
}
