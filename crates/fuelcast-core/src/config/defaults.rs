// Single source of truth for all default values.

// --- Contract ---
pub const DEFAULT_PREDICTION_KEY: &str = crate::constants::PREDICTION_KEY_TONS;
pub const DEFAULT_ENDPOINT_PATH: &str = "/predict_fuel";

// --- Client ---
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_BUSY_LABEL: &str = "Calculating...";

// --- Form ---
pub const DEFAULT_CATEGORICAL_FIELD: &str = "ship_type";
pub const DEFAULT_TOGGLE_FIELD: &str = "monsoon_season";

// --- Animation ---
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 1_000;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16; // ~60 Hz
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 10;

// --- Locale ---
pub const DEFAULT_GROUPING_SEPARATOR: &str = ",";
pub const DEFAULT_DECIMAL_SEPARATOR: &str = ".";
pub const DEFAULT_MAX_FRACTION_DIGITS: u32 = 3;
pub const MAX_FRACTION_DIGITS_LIMIT: u32 = 20;

// --- Server ---
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_CATEGORIES: &[&str] = &["Cargo", "Container", "Tanker"];
pub const DEFAULT_NUMERIC_FEATURES: &[&str] = &[
    "engine_power_kw",
    "sfoc",
    "cargo_load_pct",
    "avg_speed_knots",
    "distance_nm",
    "wave_height_m",
    "wind_speed_mps",
    "current_speed_mps",
    "monsoon_season",
];
pub const DEFAULT_POWER_FEATURE: &str = "engine_power_kw";
pub const DEFAULT_SFOC_FEATURE: &str = "sfoc";
pub const DEFAULT_DISTANCE_FEATURE: &str = "distance_nm";
pub const DEFAULT_SPEED_FEATURE: &str = "avg_speed_knots";
pub const DEFAULT_PENALTY: f64 = 1.15;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
