use crate::{Error, Post, Ranked, RelatedPosts, Result, TagIndex, TallyBuffer, TopN};
use rayon::prelude::*;

/// Number of related posts per subject in the reference output
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for a related-posts run
#[derive(Debug, Clone)]
pub struct RelatedConfig {
    pub top_n: usize,
    /// Spread subject posts across the rayon pool
    pub parallel: bool,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            parallel: true,
        }
    }
}

impl RelatedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Computes the top-N most tag-similar posts for every post in a corpus.
///
/// Holds the corpus and its [`TagIndex`] read-only; all mutable state lives
/// in the [`TallyBuffer`] handed to each call, so subject posts can be
/// processed on any number of threads.
pub struct RelatedSelector<'a> {
    posts: &'a [Post],
    index: TagIndex,
    config: RelatedConfig,
}

impl<'a> RelatedSelector<'a> {
    /// Build the tag index for `posts` and prepare a selector
    pub fn new(posts: &'a [Post], config: RelatedConfig) -> Result<Self> {
        let index = TagIndex::build(posts);
        Self::with_index(posts, index, config)
    }

    /// Use an index built earlier from the same `posts`.
    ///
    /// # Panics
    /// If `index` was built from a corpus of a different size.
    pub fn with_index(posts: &'a [Post], index: TagIndex, config: RelatedConfig) -> Result<Self> {
        config.validate()?;
        assert_eq!(
            index.post_count(),
            posts.len(),
            "tag index built for {} posts, selector given {}",
            index.post_count(),
            posts.len()
        );
        Ok(Self { posts, index, config })
    }

    #[inline]
    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    #[inline]
    pub fn config(&self) -> &RelatedConfig {
        &self.config
    }

    /// A tally buffer sized for this corpus
    #[inline]
    #[must_use]
    pub fn tally_buffer(&self) -> TallyBuffer {
        TallyBuffer::new(self.posts.len())
    }

    /// Ranked candidates for the post at `subject`, most shared first
    pub fn rank(&self, subject: usize, tally: &mut TallyBuffer) -> Vec<Ranked> {
        tally.count(subject, &self.posts[subject], &self.index);

        let mut top = TopN::new(self.config.top_n);
        for (post, &count) in tally.as_slice().iter().enumerate() {
            top.offer(count, post);
        }
        top.finish(subject, self.posts.len())
    }

    /// Result record for the post at `subject`
    pub fn related_for(&self, subject: usize, tally: &mut TallyBuffer) -> RelatedPosts {
        let post = &self.posts[subject];
        let related = self
            .rank(subject, tally)
            .into_iter()
            .map(|r| self.posts[r.post].clone())
            .collect();

        RelatedPosts {
            id: post.id.clone(),
            tags: post.tags.clone(),
            related,
        }
    }

    /// One record per post, in input order
    pub fn run(&self) -> Vec<RelatedPosts> {
        if self.config.parallel {
            self.run_parallel()
        } else {
            self.run_sequential()
        }
    }

    pub fn run_sequential(&self) -> Vec<RelatedPosts> {
        let mut tally = self.tally_buffer();
        (0..self.posts.len())
            .map(|subject| self.related_for(subject, &mut tally))
            .collect()
    }

    /// Each rayon worker owns a private tally buffer
    pub fn run_parallel(&self) -> Vec<RelatedPosts> {
        (0..self.posts.len())
            .into_par_iter()
            .map_init(
                || self.tally_buffer(),
                |tally, subject| self.related_for(subject, tally),
            )
            .collect()
    }
}

/// Convenience entry point: index `posts` and compute every record
pub fn related_posts(posts: &[Post], config: RelatedConfig) -> Result<Vec<RelatedPosts>> {
    Ok(RelatedSelector::new(posts, config)?.run())
}
