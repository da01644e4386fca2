use crate::{Post, TagIndex};

/// Per-subject shared-tag counters, one slot per post in the corpus.
///
/// Reused across subject posts; [`TallyBuffer::count`] resets it first so
/// nothing carries over from the previous subject.
#[derive(Debug, Clone)]
pub struct TallyBuffer {
    counts: Vec<u32>,
}

impl TallyBuffer {
    #[inline]
    #[must_use]
    pub fn new(post_count: usize) -> Self {
        Self {
            counts: vec![0; post_count],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    /// Count, for every post, how many of the subject's tags it carries.
    /// The subject's own counter is forced to zero.
    ///
    /// # Panics
    /// If the buffer or index were sized for a different corpus, or the
    /// subject carries a tag the index has never seen.
    pub fn count(&mut self, subject: usize, post: &Post, index: &TagIndex) {
        assert_eq!(
            self.counts.len(),
            index.post_count(),
            "tally buffer sized for {} posts, index covers {}",
            self.counts.len(),
            index.post_count()
        );
        assert!(
            subject < self.counts.len(),
            "subject index {} out of range for {} posts",
            subject,
            self.counts.len()
        );

        self.reset();

        for tag in &post.tags {
            let Some(postings) = index.postings(tag.as_str()) else {
                panic!("tag {:?} of post {:?} missing from tag index", tag.as_str(), post.id);
            };
            for &other in postings {
                self.counts[other] += 1;
            }
        }

        self.counts[subject] = 0;
    }

    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> u32 {
        self.counts[idx]
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }
}
