use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tagsim_core::{validate_unique_ids, Error, Post, Result};
use tracing::debug;

/// Load and validate the post document at `path`
pub fn read_posts<P: AsRef<Path>>(path: P) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let posts = posts_from_reader(BufReader::new(file))?;
    debug!("Loaded {} posts from {:?}", posts.len(), path);
    Ok(posts)
}

pub fn posts_from_reader<R: Read>(reader: R) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_reader(reader)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    validate_unique_ids(&posts)?;
    Ok(posts)
}

pub fn posts_from_slice(bytes: &[u8]) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_slice(bytes)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    validate_unique_ids(&posts)?;
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_posts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"_id": "a", "title": "First", "tags": ["x", "y"]}},
               {{"_id": "b", "title": "Second", "tags": []}}]"#
        )
        .unwrap();

        let posts = read_posts(file.path()).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[0].tags[1].as_str(), "y");
        assert!(posts[1].tags.is_empty());
    }

    #[test]
    fn test_malformed_input() {
        let missing_tags = br#"[{"_id": "a", "title": "First"}]"#;
        assert!(matches!(posts_from_slice(missing_tags), Err(Error::Serialization(_))));

        let wrong_type = br#"[{"_id": 7, "title": "First", "tags": []}]"#;
        assert!(matches!(posts_from_slice(wrong_type), Err(Error::Serialization(_))));

        assert!(matches!(posts_from_slice(b"{}"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let doc = br#"[{"_id": "a", "title": "", "tags": []},
                       {"_id": "a", "title": "", "tags": []}]"#;
        assert!(matches!(posts_from_slice(doc), Err(Error::DuplicatePostId(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_posts(dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
