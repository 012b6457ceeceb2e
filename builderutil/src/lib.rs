#![deny(missing_docs)]
//! Functional options for any type.
//!
//! A value is built by running an ordered list of fallible *mutators*
//! against a fresh instance. Mutators come from *option providers*, anything
//! implementing [`Lister`]. [`build`] walks the providers in order, then
//! each provider's mutators in order, and stops at the first error.
//!
//! ## Semantics
//!
//! - The target starts at `T::default()` ([`build`]) or at a caller-supplied
//!   base ([`build_from`]).
//! - A `None` provider and a `None` mutator entry are skipped, not errors.
//! - The first failing mutator's error is returned unchanged. The partly
//!   configured target is dropped; callers never see it.
//!
//! [`Options`] is the ready-made provider. [`OptionError`] is the default
//! error type, but any `E` works.
//!
//! ## Logging
//!
//! Skips, failures and completions are reported through `tracing` at
//! `trace`/`debug` level. No subscriber is installed.

pub mod build;
pub mod error;
pub mod lister;
pub mod options;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use build::{build, build_from};
pub use error::OptionError;
pub use lister::{Lister, Mutator};
pub use options::{Options, mutator};
