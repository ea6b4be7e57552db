//! # vigil-storage
//!
//! Content-fingerprint-addressed persistence of prior check verdicts.
//! A `CacheEntry` is valid only while the file's content hash and the
//! rule-set version both match the key it was stored under; either changing
//! makes the key stop resolving. The cache is a performance optimisation,
//! never a correctness dependency: every storage error degrades to a miss.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod retention;
pub mod store;

pub use store::{fingerprint, CacheEntry, CacheKey, CacheStats, CacheStore};
