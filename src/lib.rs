//! ttsync - tagged-template i18n extraction and translation sync
//!
//! ttsync scans UI source files for tagged template strings
//! (``t`Hello ${name}` ``), normalizes each occurrence into a stable
//! dictionary key,
//! merges new keys into the base locale's dictionary, and fills gaps in
//! target-locale dictionaries through a translation provider that must
//! leave `${...}` placeholder spans untouched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments and pipeline run)
//! - `config`: Configuration file loading and CLI overrides
//! - `dictionary`: Template definitions and the per-locale key map
//! - `extract`: Source scanning for tagged template occurrences
//! - `normalize`: Placeholder renaming into canonical keys
//! - `runtime`: Render-time lookup for tagged template invocations
//! - `store`: Per-locale dictionary persistence
//! - `sync`: Append-only base dictionary synchronization
//! - `translate`: Gap diffing and the translation provider

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod extract;
pub mod normalize;
pub mod reporter;
pub mod runtime;
pub mod store;
pub mod sync;
pub mod translate;
