//! Loading the generated content index into a [`ContentSnapshot`].
//!
//! The authoring pipeline writes one JSON array per document type:
//!
//! ```text
//! <content_dir>/Post/_index.json
//! <content_dir>/CaseStudy/_index.json
//! ```

use crate::error::{Error, Result};
use crate::types::{CaseStudy, ContentSnapshot, Post};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const POST_INDEX: &str = "Post/_index.json";
pub const CASE_STUDY_INDEX: &str = "CaseStudy/_index.json";

/// Load posts and case studies from a generated content directory.
///
/// A missing post index is an error. A site without case studies may have
/// no `CaseStudy` index at all.
pub fn load_snapshot<P: AsRef<Path>>(content_dir: P) -> Result<ContentSnapshot> {
    let dir = content_dir.as_ref();

    let post_index = dir.join(POST_INDEX);
    if !post_index.exists() {
        return Err(Error::InvalidData(format!(
            "Post index not found: {}",
            post_index.display()
        )));
    }
    let posts: Vec<Post> = read_index(&post_index)?;

    let case_study_index = dir.join(CASE_STUDY_INDEX);
    let case_studies: Vec<CaseStudy> = if case_study_index.exists() {
        read_index(&case_study_index)?
    } else {
        Vec::new()
    };

    Ok(ContentSnapshot::new(posts, case_studies))
}

fn read_index<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| Error::ContentParse(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    const POSTS: &str = r#"[
        {
            "_id": "en/hello.mdx",
            "slug": "hello", "language": "en", "title": "Hello",
            "description": "First post", "category": "Tech",
            "date": "2024-01-01T00:00:00.000Z", "timeToRead": 4,
            "image": "/images/hello.png", "url": "/en/blog/hello",
            "body": { "raw": "...", "code": "..." }
        },
        {
            "slug": "bonjour", "language": "fr", "title": "Bonjour",
            "description": "Premier article", "category": "Vie",
            "date": "2024-01-15", "url": "/fr/blog/bonjour"
        }
    ]"#;

    #[test]
    fn test_load_snapshot_posts_and_case_studies() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), POST_INDEX, POSTS);
        write(
            dir.path(),
            CASE_STUDY_INDEX,
            r#"[{
                "slug": "acme", "title": "Acme", "date": "2023-06-01",
                "tags": ["Developer Senior Full Stack"],
                "client": { "name": "Acme Corp" },
                "description": "Rebuild", "url": "/work/acme",
                "testimonial": { "content": "Great work" }
            }]"#,
        );

        let snapshot = load_snapshot(dir.path()).unwrap();
        assert_eq!(snapshot.posts().len(), 2);
        assert_eq!(snapshot.posts()[0].time_to_read, 4);
        assert_eq!(snapshot.posts()[1].time_to_read, 0);
        assert_eq!(snapshot.case_studies().len(), 1);
        assert!(snapshot.case_studies()[0].testimonial.is_some());
    }

    #[test]
    fn test_load_snapshot_without_case_studies() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), POST_INDEX, POSTS);

        let snapshot = load_snapshot(dir.path()).unwrap();
        assert_eq!(snapshot.posts().len(), 2);
        assert!(snapshot.case_studies().is_empty());
    }

    #[test]
    fn test_load_snapshot_missing_post_index() {
        let dir = TempDir::new().unwrap();
        let result = load_snapshot(dir.path());
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_load_snapshot_malformed_index_names_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), POST_INDEX, r#"[{ "slug": "broken" }]"#);

        let err = load_snapshot(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ContentParse(..)));
        assert!(err.to_string().contains("_index.json"));
    }
}
