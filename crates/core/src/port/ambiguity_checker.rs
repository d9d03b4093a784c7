// Queue topology port (ambiguity check only)

/// Topology collaborator as seen by placement
///
/// Implementations answer from the topology's current state; callers
/// must not cache the answer across submissions.
pub trait AmbiguityChecker: Send + Sync {
    /// True if `queue_name` resolves to more than one queue
    ///
    /// # Arguments
    /// * `queue_name` - Short leaf name (`q1`) or full path (`root.a.q1`)
    fn is_ambiguous(&self, queue_name: &str) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Mock AmbiguityChecker for testing
    ///
    /// Reports names in the ambiguous set as ambiguous and counts calls.
    pub struct MockAmbiguityChecker {
        ambiguous: Arc<Mutex<HashSet<String>>>,
        calls: AtomicUsize,
    }

    impl MockAmbiguityChecker {
        /// Checker that never reports ambiguity
        pub fn new() -> Self {
            Self {
                ambiguous: Arc::new(Mutex::new(HashSet::new())),
                calls: AtomicUsize::new(0),
            }
        }

        /// Checker that reports the given names as ambiguous
        pub fn with_ambiguous<I, S>(names: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let checker = Self::new();
            for name in names {
                checker.set_ambiguous(name);
            }
            checker
        }

        pub fn set_ambiguous(&self, name: impl Into<String>) {
            self.ambiguous.lock().unwrap().insert(name.into());
        }

        pub fn clear_ambiguous(&self, name: &str) {
            self.ambiguous.lock().unwrap().remove(name);
        }

        /// Number of `is_ambiguous` calls so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MockAmbiguityChecker {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AmbiguityChecker for MockAmbiguityChecker {
        fn is_ambiguous(&self, queue_name: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.ambiguous.lock().unwrap().contains(queue_name)
        }
    }
}
