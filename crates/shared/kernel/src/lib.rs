//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use kata_kernel::config::load_kata_config;
//!
//! let cfg = load_kata_config(Some("kata")).unwrap_or_default();
//! assert!(cfg.dice.sides >= 0);
//! ```
pub mod config;

pub use kata_domain as domain;
