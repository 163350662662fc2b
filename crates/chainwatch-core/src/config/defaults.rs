// Single source of truth for all default values.

// --- Integrity ---
pub const DEFAULT_AUTO_CORRECT: bool = true;

// --- Optimization ---
pub const DEFAULT_MAX_BUDGET: f64 = 50_000.0;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;
/// Budget range the dashboard offers. Values outside it are accepted but logged.
pub const RECOMMENDED_MIN_BUDGET: f64 = 1_000.0;
pub const RECOMMENDED_MAX_BUDGET: f64 = 1_000_000.0;

// --- Estimation ---
/// Share of the budget the base cost draw may reach.
pub const DEFAULT_BASE_COST_BUDGET_SHARE: f64 = 0.4;
pub const DEFAULT_MIN_BASE_HOURS: u32 = 1;
pub const DEFAULT_MAX_BASE_HOURS: u32 = 48;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "chainwatch=info";
pub const DEFAULT_JSON_LOGS: bool = false;
