use atomicwrites::{AtomicFile, OverwriteBehavior};
use std::io::{BufWriter, Write};
use std::path::Path;
use tagsim_core::{Error, RelatedPosts, Result};
use tracing::debug;

/// Write the result document, replacing `path` atomically
pub fn write_related<P: AsRef<Path>>(path: P, related: &[RelatedPosts]) -> Result<()> {
    let path = path.as_ref();
    let file = AtomicFile::new(path, OverwriteBehavior::AllowOverwrite);
    file.write(|f| related_to_writer(BufWriter::new(f), related))
        .map_err(|e| match e {
            atomicwrites::Error::Internal(io) => Error::Io(io),
            atomicwrites::Error::User(inner) => inner,
        })?;
    debug!("Wrote {} records to {:?}", related.len(), path);
    Ok(())
}

pub fn related_to_writer<W: Write>(mut writer: W, related: &[RelatedPosts]) -> Result<()> {
    serde_json::to_writer(&mut writer, related)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

pub fn related_to_vec(related: &[RelatedPosts]) -> Result<Vec<u8>> {
    serde_json::to_vec(related).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsim_core::Post;

    fn record() -> RelatedPosts {
        RelatedPosts {
            id: "a".to_string(),
            tags: vec!["x".into()],
            related: vec![Post::tagged("b", ["x"]).with_title("B")],
        }
    }

    #[test]
    fn test_output_shape() {
        let bytes = related_to_vec(&[record()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "_id": "a",
                "tags": ["x"],
                "related": [{"_id": "b", "title": "B", "tags": ["x"]}]
            }])
        );
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("related.json");
        std::fs::write(&path, "stale").unwrap();

        write_related(&path, &[record()]).unwrap();

        let contents = std::fs::read(&path).unwrap();
        let back: Vec<RelatedPosts> = serde_json::from_slice(&contents).unwrap();
        assert_eq!(back, vec![record()]);
    }
}
