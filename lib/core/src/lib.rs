//! # tagsim Core
//!
//! Core library for tagsim: for every post in a corpus, find the N posts
//! sharing the most tags with it.
//!
//! This crate provides the data model and the algorithm:
//!
//! - [`Post`] / [`Tag`] - Input records
//! - [`TagIndex`] - Inverted index from tag to post indices
//! - [`TallyBuffer`] - Reusable per-subject shared-tag counters
//! - [`TopN`] - Bounded insertion buffer for the best candidates
//! - [`RelatedSelector`] - Runs the selection, sequentially or on rayon
//!
//! ## Example
//!
//! ```rust
//! use tagsim_core::{related_posts, Post, RelatedConfig};
//!
//! let posts = vec![
//!     Post::tagged("p0", ["a", "b"]),
//!     Post::tagged("p1", ["a", "c"]),
//!     Post::tagged("p2", ["b", "c"]),
//! ];
//!
//! let config = RelatedConfig { top_n: 2, ..Default::default() };
//! let related = related_posts(&posts, config).unwrap();
//!
//! assert_eq!(related[0].related[0].id, "p1");
//! assert_eq!(related[0].related[1].id, "p2");
//! ```

pub mod error;
pub mod post;
pub mod index;
pub mod tally;
pub mod topn;
pub mod selector;

pub use error::{Error, Result};
pub use post::{Post, Tag, RelatedPosts, validate_unique_ids};
pub use index::TagIndex;
pub use tally::TallyBuffer;
pub use topn::{TopN, Ranked};
pub use selector::{RelatedSelector, RelatedConfig, related_posts, DEFAULT_TOP_N};
