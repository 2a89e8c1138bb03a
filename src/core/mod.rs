//! # Resolution Engine
//!
//! - `types.rs`: candidates, selection results, action requests
//! - `ranker.rs`: similarity scoring and top-N truncation
//! - `selector.rs`: interactive numbered-list selection
//! - `resolver.rs`: fetch -> rank -> select pipeline

pub mod ranker;
pub mod resolver;
pub mod selector;
pub mod types;

pub use ranker::Ranker;
pub use resolver::{Resolution, Resolver};
pub use selector::Selector;
