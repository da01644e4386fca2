// Inverted index from tag to the posts carrying it
use ahash::AHashMap;
use crate::{Post, Tag};

/// Maps each distinct tag to the indices of the posts that carry it.
///
/// Indices are positions in the post slice the index was built from and
/// appear in ascending scan order. A post listing the same tag twice is
/// recorded twice. The index is never mutated after [`TagIndex::build`].
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    // tag -> post indices, in scan order
    postings: AHashMap<Tag, Vec<usize>>,
    post_count: usize,
}

impl TagIndex {
    pub fn build(posts: &[Post]) -> Self {
        let mut postings: AHashMap<Tag, Vec<usize>> = AHashMap::with_capacity(100);

        for (idx, post) in posts.iter().enumerate() {
            for tag in &post.tags {
                match postings.get_mut(tag) {
                    Some(list) => list.push(idx),
                    None => {
                        postings.insert(tag.clone(), vec![idx]);
                    }
                }
            }
        }

        Self {
            postings,
            post_count: posts.len(),
        }
    }

    /// Post indices carrying `tag`, or `None` if no post has it
    #[inline]
    pub fn postings(&self, tag: &str) -> Option<&[usize]> {
        self.postings.get(tag).map(Vec::as_slice)
    }

    /// Number of posts the index was built from
    #[inline]
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.post_count
    }

    /// Number of distinct tags
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &[usize])> {
        self.postings.iter().map(|(tag, list)| (tag, list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Post> {
        vec![
            Post::tagged("p0", ["a", "b"]),
            Post::tagged("p1", ["a", "c"]),
            Post::tagged("p2", ["b", "c"]),
            Post::tagged("p3", Vec::<&str>::new()),
        ]
    }

    #[test]
    fn test_postings_in_scan_order() {
        let index = TagIndex::build(&corpus());
        assert_eq!(index.len(), 3);
        assert_eq!(index.post_count(), 4);
        assert_eq!(index.postings("a"), Some(&[0, 1][..]));
        assert_eq!(index.postings("b"), Some(&[0, 2][..]));
        assert_eq!(index.postings("c"), Some(&[1, 2][..]));
        assert_eq!(index.postings("d"), None);
    }

    #[test]
    fn test_every_tag_maps_back_to_its_post() {
        let posts = corpus();
        let index = TagIndex::build(&posts);
        for (idx, post) in posts.iter().enumerate() {
            for tag in &post.tags {
                let list = index.postings(tag.as_str()).unwrap();
                assert!(list.contains(&idx));
            }
        }
        for (_, list) in index.iter() {
            assert!(list.iter().all(|&i| i < posts.len()));
            assert!(list.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_duplicate_tag_recorded_twice() {
        let posts = vec![Post::tagged("p0", ["a", "a"]), Post::tagged("p1", ["a"])];
        let index = TagIndex::build(&posts);
        assert_eq!(index.postings("a"), Some(&[0, 0, 1][..]));
    }

    #[test]
    fn test_empty_corpus() {
        let index = TagIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.post_count(), 0);
    }
}
