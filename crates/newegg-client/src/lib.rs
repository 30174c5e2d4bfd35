//! Client library for the Newegg open web-services catalog.
//!
//! Resolves human-typed store and category names to the numeric identifiers
//! the catalog requires (fuzzy matching biased by topical groupings), and
//! issues the catalog operations: store listing, categories, navigation,
//! advanced product search, and product specifications.
//!
//! ```no_run
//! # async fn example() -> Result<(), newegg_client::NeweggError> {
//! let client = newegg_client::NeweggClient::new(30)?;
//! let store_id = client.store_id_by_name(Some("hardware")).await?;
//! let results = client
//!     .search(&newegg_client::SearchOptions {
//!         store_id,
//!         keywords: Some("ssd".to_owned()),
//!         ..Default::default()
//!     })
//!     .await?;
//! # let _ = results;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod matching;
pub mod names;
pub mod types;

pub use client::NeweggClient;
pub use error::NeweggError;
pub use matching::MatchText;
pub use types::{Category, SearchOptions, Store};
