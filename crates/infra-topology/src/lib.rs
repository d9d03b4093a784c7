// Placement Infrastructure - Queue Topology Adapters
// Implements: AmbiguityChecker

pub mod in_memory_topology;

pub use in_memory_topology::InMemoryQueueTopology;
