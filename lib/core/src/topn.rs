use smallvec::SmallVec;

/// A selected candidate: post index and the number of tags it shares
/// with the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    pub post: usize,
    pub shared: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    count: u32,
    post: Option<usize>,
}

/// Fixed-size buffer of the N best candidates seen so far, sorted by
/// descending count.
///
/// Insertion only shifts strictly smaller entries, so on equal counts the
/// earlier offered candidate keeps its place. Offers with count zero are
/// never taken; empty slots are filled later by [`TopN::finish`].
#[derive(Debug, Clone)]
pub struct TopN {
    slots: SmallVec<[Slot; 8]>,
}

impl TopN {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            slots: SmallVec::from_elem(Slot::default(), n),
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Smallest count currently held (the last slot)
    #[inline]
    #[must_use]
    pub fn min_count(&self) -> u32 {
        self.slots.last().map_or(u32::MAX, |slot| slot.count)
    }

    #[inline]
    pub fn offer(&mut self, count: u32, post: usize) {
        if count <= self.min_count() {
            return;
        }

        let mut pos = self.slots.len() - 1;
        while pos > 0 && count > self.slots[pos - 1].count {
            self.slots[pos] = self.slots[pos - 1];
            pos -= 1;
        }
        self.slots[pos] = Slot {
            count,
            post: Some(post),
        };
    }

    /// Resolve the buffer into ranked candidates, most shared first.
    ///
    /// Unfilled slots take the lowest-index posts that are neither `subject`
    /// nor already selected, with a count of zero. With fewer than N other
    /// posts in the corpus the result is shorter than N.
    #[must_use]
    pub fn finish(self, subject: usize, post_count: usize) -> Vec<Ranked> {
        let mut ranked: Vec<Ranked> = self
            .slots
            .iter()
            .filter_map(|slot| slot.post.map(|post| Ranked { post, shared: slot.count }))
            .collect();

        let wanted = self.slots.len().min(post_count.saturating_sub(1));
        let mut next = 0;
        while ranked.len() < wanted && next < post_count {
            let candidate = next;
            next += 1;
            if candidate == subject || ranked.iter().any(|r| r.post == candidate) {
                continue;
            }
            ranked.push(Ranked {
                post: candidate,
                shared: 0,
            });
        }

        ranked
    }
}
