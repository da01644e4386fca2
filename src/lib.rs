//! # tagsim
//!
//! Related posts by exact tag overlap.
//!
//! For each post in a corpus, tagsim finds the N other posts that share the
//! most tags with it. Ties go to the post that appears earlier in the input.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install tagsim
//! tagsim --input posts.json --output related_posts.json --top-n 5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use tagsim::prelude::*;
//!
//! let posts = vec![
//!     Post::tagged("p0", ["rust", "cli"]),
//!     Post::tagged("p1", ["rust", "web"]),
//!     Post::tagged("p2", ["rust", "cli", "web"]),
//! ];
//!
//! let related = related_posts(&posts, RelatedConfig::default()).unwrap();
//! assert_eq!(related.len(), 3);
//! assert_eq!(related[0].related[0].id, "p2");
//! ```
//!
//! ## Crate Structure
//!
//! - [`tagsim-core`](https://docs.rs/tagsim-core) - Data model, tag index, top-N selection
//! - [`tagsim-io`](https://docs.rs/tagsim-io) - JSON post and result documents
//!
//! ## How it works
//!
//! 1. One pass over the posts builds an inverted index from tag to post indices.
//! 2. For each subject post, the postings of its tags are tallied into a
//!    per-post counter buffer (the subject's own counter is zeroed).
//! 3. A fixed N-slot insertion buffer keeps the highest counts seen during a
//!    scan in index order, so earlier posts win ties.
//! 4. Free slots are padded with the lowest-index remaining posts at count 0.

// Re-export core types
pub use tagsim_core::{
    Post, Tag, RelatedPosts,
    TagIndex, TallyBuffer, TopN, Ranked,
    RelatedSelector, RelatedConfig, related_posts, DEFAULT_TOP_N,
    Error, Result,
};

// Re-export I/O
pub use tagsim_io::{read_posts, write_related};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Post, Tag, RelatedPosts,
        TagIndex, RelatedSelector, RelatedConfig, related_posts,
        Error, Result,
        read_posts, write_related,
    };
}
