#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared across the workspace.
//! At the moment this is a single attribute, [`macro@kata_error`], which every slice
//! uses to declare its error enum.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! kata-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The expansion refers to `::thiserror`, so consumers must depend on it too.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a slice error enum.
///
/// # Expansion
///
/// * **Derives**: adds `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context trait**: generates `<Name>Ext<T>` with `.context(...)`. It is implemented
///   for `Result<T, Name>` and for `Result<T, Source>` of every wrapped upstream error.
/// * **Conversions**: `From<Source>` for each variant holding a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream results.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **`format_context`**: a private helper rendering `" (context)"` for use in
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The item must be an enum.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. `context`, when present, must be `Option<Cow<'static, str>>`.
/// 4. A variant wrapping a source must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[kata_derive::kata_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn kata_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
