/// Number of faces used when a die is constructed without an explicit side count.
pub const DEFAULT_SIDES: i64 = 6;

/// Base name of the configuration file looked up by the kernel loader.
pub const CONFIG_FILE: &str = "kata";

/// Prefix for environment overrides (`KATA__DICE__SEED=7`).
pub const ENV_PREFIX: &str = "KATA";

/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";

/// Log level applied when the configuration does not name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
