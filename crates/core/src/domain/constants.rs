// Placement constants (No magic values)

/// Wildcard token: matches any application name as a source,
/// and substitutes the application's own name as a queue.
pub const CURRENT_APP_MAPPING: &str = "%application";

/// Queue name meaning "no explicit queue requested"
pub const DEFAULT_QUEUE_NAME: &str = "default";

/// Separator between path segments of a hierarchical queue name
pub const QUEUE_PATH_SEPARATOR: char = '.';

/// Separator between the fields of a textual mapping (`a:source:queue`)
pub const MAPPING_FIELD_DELIMITER: char = ':';

/// Separator between mappings in a mapping list
pub const MAPPING_LIST_DELIMITER: char = ',';

/// Env var holding the mapping list (e.g. `a:app1:q1,a:%application:%application`)
pub const ENV_QUEUE_MAPPINGS: &str = "PLACEMENT_QUEUE_MAPPINGS";

/// Env var holding the overwrite policy (`true` / `false`)
pub const ENV_OVERRIDE_QUEUE_MAPPINGS: &str = "PLACEMENT_OVERRIDE_QUEUE_MAPPINGS";
