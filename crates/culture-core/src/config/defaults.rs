// Single source of truth for all default values.

// --- Profiles ---
pub const DEFAULT_MAX_PROFILES: usize = 5;
pub const DEFAULT_SCORE: u8 = 50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
