//! Hash collection aliases used in hot paths.

pub use rustc_hash::{FxHashMap, FxHashSet};
