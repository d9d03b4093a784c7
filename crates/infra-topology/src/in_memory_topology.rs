// In-memory queue topology
use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

use placement_core::domain::constants::QUEUE_PATH_SEPARATOR;
use placement_core::port::AmbiguityChecker;

/// Queue hierarchy held in memory
///
/// Registering `root.a.q1` also registers `root` and `root.a`. A short
/// name is ambiguous when more than one registered path ends in it.
/// Reads and writes may interleave; every check sees the current state.
pub struct InMemoryQueueTopology {
    index: RwLock<QueueIndex>,
}

/// Full paths plus a leaf -> full paths lookup
#[derive(Default)]
struct QueueIndex {
    paths: BTreeSet<String>,
    by_leaf: HashMap<String, BTreeSet<String>>,
}

impl QueueIndex {
    fn insert(&mut self, path: &str) -> bool {
        if !self.paths.insert(path.to_string()) {
            return false;
        }
        self.by_leaf
            .entry(leaf_of(path).to_string())
            .or_default()
            .insert(path.to_string());
        true
    }

    fn remove(&mut self, path: &str) -> bool {
        if !self.paths.remove(path) {
            return false;
        }
        let leaf = leaf_of(path);
        if let Some(paths) = self.by_leaf.get_mut(leaf) {
            paths.remove(path);
            if paths.is_empty() {
                self.by_leaf.remove(leaf);
            }
        }
        true
    }

    fn paths_for_leaf(&self, leaf: &str) -> usize {
        self.by_leaf.get(leaf).map_or(0, BTreeSet::len)
    }
}

fn leaf_of(path: &str) -> &str {
    path.rsplit(QUEUE_PATH_SEPARATOR).next().unwrap_or(path)
}

fn is_valid_path(path: &str) -> bool {
    !path.is_empty() && path.split(QUEUE_PATH_SEPARATOR).all(|segment| !segment.is_empty())
}

impl InMemoryQueueTopology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self {
            index: RwLock::new(QueueIndex::default()),
        }
    }

    /// Create a topology from full queue paths
    ///
    /// # Example
    /// ```ignore
    /// let topology = InMemoryQueueTopology::from_paths(["root.a.q1", "root.b.q1"]);
    /// assert!(topology.is_ambiguous("q1"));
    /// ```
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let topology = Self::new();
        for path in paths {
            topology.add_queue(path.as_ref());
        }
        topology
    }

    /// Register a queue and its ancestors
    ///
    /// Returns false if the path is malformed or already registered.
    pub fn add_queue(&self, path: &str) -> bool {
        if !is_valid_path(path) {
            warn!(path = %path, "Ignoring malformed queue path");
            return false;
        }

        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);

        let mut prefix = String::new();
        let mut added = false;
        for segment in path.split(QUEUE_PATH_SEPARATOR) {
            if !prefix.is_empty() {
                prefix.push(QUEUE_PATH_SEPARATOR);
            }
            prefix.push_str(segment);
            added = index.insert(&prefix);
        }

        debug!(path = %path, queues = index.paths.len(), "Queue registered");
        added
    }

    /// Remove a queue and everything below it
    ///
    /// Returns false if the path was not registered.
    pub fn remove_queue(&self, path: &str) -> bool {
        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);

        let child_prefix = format!("{}{}", path, QUEUE_PATH_SEPARATOR);
        let doomed: Vec<String> = index
            .paths
            .iter()
            .filter(|p| p.as_str() == path || p.starts_with(&child_prefix))
            .cloned()
            .collect();

        for p in &doomed {
            index.remove(p);
        }

        debug!(path = %path, removed = doomed.len(), "Queue removed");
        !doomed.is_empty()
    }

    /// True if `name` is a registered full path or short name
    pub fn contains(&self, name: &str) -> bool {
        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        index.paths.contains(name) || index.paths_for_leaf(name) > 0
    }

    /// Number of registered queues (ancestors included)
    pub fn queue_count(&self) -> usize {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .paths
            .len()
    }
}

impl Default for InMemoryQueueTopology {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbiguityChecker for InMemoryQueueTopology {
    fn is_ambiguous(&self, queue_name: &str) -> bool {
        // Full paths are unique by construction
        if queue_name.contains(QUEUE_PATH_SEPARATOR) {
            return false;
        }

        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        let ambiguous = index.paths_for_leaf(queue_name) > 1;

        debug!(
            queue = %queue_name,
            ambiguous = %ambiguous,
            "Ambiguity check completed"
        );

        ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestors_registered() {
        let topology = InMemoryQueueTopology::from_paths(["root.a.q1"]);

        assert_eq!(topology.queue_count(), 3);
        assert!(topology.contains("root"));
        assert!(topology.contains("root.a"));
        assert!(topology.contains("q1"));
        assert!(!topology.contains("q2"));
    }

    #[test]
    fn test_short_name_ambiguity() {
        let topology = InMemoryQueueTopology::from_paths(["root.a.q1", "root.b.q1", "root.b.q2"]);

        assert!(topology.is_ambiguous("q1"));
        assert!(!topology.is_ambiguous("q2"));
        assert!(!topology.is_ambiguous("unknown"));
    }

    #[test]
    fn test_full_path_never_ambiguous() {
        let topology = InMemoryQueueTopology::from_paths(["root.a.q1", "root.b.q1"]);

        assert!(!topology.is_ambiguous("root.a.q1"));
        assert!(!topology.is_ambiguous("root.b.q1"));
    }

    #[test]
    fn test_parent_names_count_toward_ambiguity() {
        // "a" is both root.a and root.b.a
        let topology = InMemoryQueueTopology::from_paths(["root.a.q1", "root.b.a"]);

        assert!(topology.is_ambiguous("a"));
    }

    #[test]
    fn test_add_queue_results() {
        let topology = InMemoryQueueTopology::new();

        assert!(topology.add_queue("root.q1"));
        assert!(!topology.add_queue("root.q1"), "Duplicate add should report false");
        assert!(!topology.add_queue(""));
        assert!(!topology.add_queue("root..q1"));
        assert!(!topology.add_queue("root."));
        assert_eq!(topology.queue_count(), 2);
    }

    #[test]
    fn test_remove_queue_resolves_ambiguity() {
        let topology = InMemoryQueueTopology::from_paths(["root.a.q1", "root.b.q1"]);
        assert!(topology.is_ambiguous("q1"));

        assert!(topology.remove_queue("root.b"));
        assert!(!topology.is_ambiguous("q1"));
        assert!(!topology.contains("root.b"));
        assert!(topology.contains("root.a.q1"));

        assert!(!topology.remove_queue("root.b"));
    }

    #[test]
    fn test_remove_does_not_touch_siblings_with_shared_prefix() {
        let topology = InMemoryQueueTopology::from_paths(["root.ab.q1", "root.a.q1"]);

        topology.remove_queue("root.a");

        assert!(topology.contains("root.ab.q1"));
        assert!(!topology.contains("root.a"));
        assert!(!topology.is_ambiguous("q1"));
    }
}
