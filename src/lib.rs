//! Suffix array-based substring search over a single in-memory corpus.
//!
//! The corpus is lowercased once and indexed with a suffix array built by
//! SA-IS. Queries are lowercased the same way, every occurrence is found with
//! two binary searches, and results come back as pages of fixed-width
//! context snippets ordered by position in the corpus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   sais.rs   │────▶│  index.rs    │────▶│  search.rs   │
//! │ (suffix_    │     │ (CorpusIndex │     │ (Searcher,   │
//! │  array)     │     │  lookup)     │     │  PageRequest)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │ contracts.rs │     │  server.rs   │
//!                     │ (debug-build │     │ (axum glue)  │
//!                     │  invariants) │     │              │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use shakesearch::{CorpusIndex, Searcher};
//!
//! let index = CorpusIndex::build(b"To be, or not to be, that is the question");
//! let searcher = Searcher::new(index);
//!
//! let snippets = searcher.search("TO BE", 0, 10);
//! assert_eq!(snippets.len(), 2);
//! ```

pub mod contracts;
pub mod error;
mod index;
mod sais;
mod search;
pub mod server;
mod utils;

pub use error::LoadError;
pub use index::CorpusIndex;
pub use sais::suffix_array;
pub use search::{PageRequest, Searcher, DEFAULT_PAGE_SIZE, SNIPPET_RADIUS};
pub use utils::{normalize, slice_within};
