#![warn(
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
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

mod config;
mod matcher;
pub mod normalize;
pub mod scoring;

pub use config::MatcherConfig;
pub use matcher::{Match, PhraseMatcher};
pub use normalize::{Normalizer, Terms, default_stopwords};
