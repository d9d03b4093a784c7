// Application Layer - Use Cases and Business Logic

pub mod app_name_rule;

// Re-exports
pub use app_name_rule::AppNameMappingPlacementRule;
