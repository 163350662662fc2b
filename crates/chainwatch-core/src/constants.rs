/// Chainwatch version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coordinate value written by the corrector when the original is unrecoverable.
pub const SENTINEL_COORDINATE: &str = "0";

/// Name written by the corrector when a record has no usable name.
pub const UNNAMED_LOCATION: &str = "Unnamed Location";

/// Capacity written by the corrector when a distribution center reports a non-positive one.
pub const DEFAULT_CAPACITY: i64 = 1000;

/// Category recorded on recommendations for events without a type.
pub const GENERAL_CATEGORY: &str = "General";

/// Intensity assumed for events that do not report one.
pub const DEFAULT_INTENSITY: u8 = 5;

/// Inclusive intensity bounds accepted at the event boundary.
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// Number of action steps carried by every recommendation.
pub const PLAYBOOK_STEPS: usize = 4;
