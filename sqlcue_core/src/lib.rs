#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod error;
pub mod pattern;
pub mod util;

pub use catalog::{Catalog, CatalogLimits, PatternSource};
pub use error::{Error, Result};
pub use pattern::{PatternId, PatternRecord};
