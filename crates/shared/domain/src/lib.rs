//! # Domain Models
//!
//! This crate contains the types every slice agrees on: the error taxonomy,
//! the configuration tree and a handful of constants.
//! Keep it lean: no I/O and no behaviour beyond defaults and trivial helpers.

pub mod config;
pub mod constants;
pub mod error;
