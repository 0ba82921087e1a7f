//! Article normalization and enrichment pipeline.
//!
//! Merges heterogeneous provider records into the uniform [`Article`] schema
//! (field fallback resolution, date coercion, title dedup, date sort),
//! enriches each row with a detected language, a model tag, and a three-class
//! tone, and exposes pure presentation filters. [`pipeline::run_watch`]
//! orchestrates one full run; it never fails — every fault degrades to a
//! safe default.

pub mod article;
pub mod enrich;
pub mod filter;
pub mod lang;
pub mod normalize;
pub mod pipeline;
pub mod tone;

pub use article::{Article, NormalizedArticle, Tone};
pub use enrich::{detect_model_tag, summarize, Enricher};
pub use filter::{cap, filter_by_keyword, filter_by_language, filter_by_model, LanguageFilter};
pub use lang::detect_language;
pub use normalize::normalize;
pub use pipeline::{run_watch, WatchOutcome};
pub use tone::{ClassifyError, LexiconClassifier, ToneClassifier};
