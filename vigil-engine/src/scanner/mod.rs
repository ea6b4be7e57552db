//! Violation scanner — raw-text rule evaluation with line windows.
//!
//! The scanner is a pure computation over in-memory content: no I/O, no
//! shared mutable state, deterministic output. Matching is heuristic by
//! design; a real parser could replace it per language without changing the
//! Violation, Rule, or report contracts.

pub mod comments;
pub mod context;
pub mod refine;
pub mod scan;
pub mod suppression;

pub use context::ScanContext;
pub use scan::scan;
pub use suppression::{extract_suppressions, SuppressionDirective};
