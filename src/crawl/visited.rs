// src/crawl/visited.rs
// =============================================================================
// The set of addresses a traversal has already visited.
//
// Membership is by canonical string, so "https://example.com/a#top" and
// "https://example.com:80/a" are the same page. Insertion order is kept so
// the set doubles as the visit log.
//
// Rust concepts:
// - HashSet: O(1) membership checks
// - Vec: remembers the order things were inserted
// =============================================================================

use std::collections::HashSet;

/// Insertion-ordered set of canonical address strings.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.seen.contains(address)
    }

    /// Adds `address`; returns false if it was already present.
    pub fn insert(&mut self, address: String) -> bool {
        if self.seen.contains(&address) {
            return false;
        }
        self.seen.insert(address.clone());
        self.order.push(address);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Addresses in the order they were visited.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_once() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.insert("https://example.com/".to_string()));
        assert!(!visited.insert("https://example.com/".to_string()));
        assert_eq!(visited.len(), 1);
        assert!(visited.contains("https://example.com/"));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut visited = VisitedSet::new();
        for address in ["https://example.com/b", "https://example.com/a", "https://example.com/c"] {
            visited.insert(address.to_string());
        }
        let order: Vec<&str> = visited.iter().collect();
        assert_eq!(
            order,
            vec!["https://example.com/b", "https://example.com/a", "https://example.com/c"]
        );
    }
}
