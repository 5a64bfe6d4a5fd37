//! Connection identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a connected client, never reused within a run.
///
/// Ids order clients by connection time, which is the order rooms list
/// their members in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(u64);

impl ClientId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Generates monotonically increasing client ids.
pub struct ClientIdGenerator {
    counter: AtomicU64,
}

impl ClientIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Generate the next unique id.
    pub fn next(&self) -> ClientId {
        ClientId(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ClientIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_ids_increase() {
        let generator = ClientIdGenerator::new();
        let a = generator.next();
        let b = generator.next();
        assert!(a < b);
        assert_eq!(a.to_string(), "c1");
        assert_eq!(b.get(), 2);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let generator = Arc::new(ClientIdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || (0..1000).map(|_| generator.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 8000);
    }
}
