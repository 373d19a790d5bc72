//! Facade crate for the `Kata` feature slices and shared modules.
//! Re-exports domain/kernel primitives and wires configuration into the slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust,no_run
//! let config = kata::kernel::config::load_kata_config(Some("kata")).unwrap_or_default();
//! let _logger = kata::init_logger("kata", &config.logging).unwrap();
//!
//! let mut die = kata::die_from_config(&config.dice).unwrap();
//! let _ = die.roll();
//! ```

pub use kata_domain as domain;
use kata_domain::config::LoggingConfig;
pub use kata_kernel as kernel;
pub use kata_logger as logger;
use kata_logger::{Logger, LoggerError, parse_level};

#[cfg(feature = "arrays")]
pub use kata_arrays as arrays;
#[cfg(feature = "dice")]
pub use kata_dice as dice;
#[cfg(feature = "text")]
pub use kata_text as text;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled slices (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "dice")]
        "dice",
        #[cfg(feature = "arrays")]
        "arrays",
        #[cfg(feature = "text")]
        "text",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Installs the global subscriber described by the `[logging]` section.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level or bad filter,
/// and any error from [`kata_logger::LoggerBuilder::init`].
pub fn init_logger(name: &str, config: &LoggingConfig) -> Result<Logger, LoggerError> {
    let level = parse_level(&config.level)?;
    let mut builder = Logger::builder().name(name).level(level).console(config.console);
    if let Some(filter) = &config.filter {
        builder = builder.filter(filter.as_str());
    }

    match &config.path {
        Some(path) => builder.directory(path).json(config.json).init(),
        None => builder.init(),
    }
}

/// Builds a die from the `[dice]` section.
///
/// # Errors
/// Returns [`dice::DieError::NegativeSides`] if the configured side count is negative.
#[cfg(feature = "dice")]
pub fn die_from_config(
    config: &domain::config::DiceConfig,
) -> Result<dice::Die, dice::DieError> {
    dice::Die::from_config(config)
}
