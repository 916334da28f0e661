//! # Anagram Core
//!
//! In-memory dictionary of words grouped by anagram equivalence, with the
//! grouping and statistics queries served over HTTP by `anagram-web`.
//!
//! - [`key`]: canonical key function
//! - [`store`]: concurrent key-to-group map and its mutations
//! - [`stats`]: aggregate statistics over a snapshot
//! - [`query`]: the query service composed from the above
//! - [`seed`]: startup loading from a word list

pub mod error;
pub mod key;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use key::{canonical_key, CanonicalKey};
pub use query::{LookupOptions, QueryService};
pub use seed::{load_word_list, seed_store, SeedOutcome};
pub use stats::Summary;
pub use store::{AnagramGroup, AnagramStore, Snapshot};
