//! Source adapters for the brand press watch.
//!
//! Each adapter converts one provider's response shape into the common loose
//! [`RawRecord`] schema: a NewsData-style aggregator, a NewsAPI-style
//! aggregator, a GNews-style aggregator, and configured RSS/Atom feeds.
//! Adapters perform a single network call with no retry; the
//! [`collect_raw_records`] entry point runs every enabled adapter
//! sequentially and absorbs individual failures as warnings.

pub mod error;
pub mod types;

mod collect;
mod feeds;
mod gnews;
mod http;
mod newsapi;
mod newsdata;

pub use collect::collect_raw_records;
pub use error::SourceError;
pub use feeds::fetch_feed;
pub use gnews::GnewsClient;
pub use newsapi::NewsApiClient;
pub use newsdata::NewsdataClient;
pub use types::RawRecord;
