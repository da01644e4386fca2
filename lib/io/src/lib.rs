//! JSON input and output for tagsim.
//!
//! Input is an array of `{"_id", "title", "tags"}` objects; output is an
//! array of `{"_id", "tags", "related"}` records.

pub mod reader;
pub mod writer;

pub use reader::{read_posts, posts_from_reader, posts_from_slice};
pub use writer::{write_related, related_to_writer, related_to_vec};
