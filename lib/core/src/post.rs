use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use crate::{Error, Result};

/// An opaque label attached to a post, compared by value only
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag(s)
    }
}

/// A post in the corpus. The title is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub tags: Vec<Tag>,
}

impl Post {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Build a post from plain string tags, title defaults to empty
    #[must_use]
    pub fn tagged<I, T>(id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self::new(id, String::new(), tags.into_iter().map(Into::into).collect())
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Result record for one subject post, most related first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPosts {
    #[serde(rename = "_id")]
    pub id: String,
    pub tags: Vec<Tag>,
    pub related: Vec<Post>,
}

/// Reject corpora where two posts share an identifier
pub fn validate_unique_ids(posts: &[Post]) -> Result<()> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(post.id.as_str()) {
            return Err(Error::DuplicatePostId(post.id.clone()));
        }
    }
    Ok(())
}
