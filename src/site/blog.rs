//! Blog post queries
//!
//! Content loading lives outside this crate; anything that can list posts
//! implements [`PostSource`] and the helpers here filter and order them.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Average reading speed used by [`reading_time`]
const WORDS_PER_MINUTE: usize = 200;

/// A blog post's frontmatter plus body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Slug, used in `/blog/<id>`
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Author slug
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub body: String,
}

/// Anything that can list every post, drafts included
pub trait PostSource {
    fn all_posts(&self) -> Vec<BlogPost>;
}

impl PostSource for Vec<BlogPost> {
    fn all_posts(&self) -> Vec<BlogPost> {
        self.clone()
    }
}

/// Read posts from a JSON array file
pub fn load_posts(path: &Path) -> Result<Vec<BlogPost>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read posts {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid posts {}", path.display()))
}

/// Published posts, newest first
#[derive(Debug, Clone, Default)]
pub struct Blog {
    posts: Vec<BlogPost>,
}

impl Blog {
    /// Query the source; drafts are dropped only in production builds
    pub fn published(source: &impl PostSource, production: bool) -> Self {
        let mut posts: Vec<BlogPost> = source
            .all_posts()
            .into_iter()
            .filter(|post| !(production && post.draft))
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Self { posts }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn featured(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|post| post.featured).collect()
    }

    /// Posts carrying `tag`, compared case-insensitively
    pub fn by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        let tag = tag.to_lowercase();
        self.posts
            .iter()
            .filter(|post| post.tags.iter().any(|t| t.to_lowercase() == tag))
            .collect()
    }

    /// Every distinct tag, sorted
    pub fn tags(&self) -> Vec<String> {
        self.posts
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Neighbours of `id` in published order: (newer, older)
    pub fn prev_next(&self, id: &str) -> (Option<&BlogPost>, Option<&BlogPost>) {
        let Some(index) = self.posts.iter().position(|post| post.id == id) else {
            return (None, None);
        };
        let prev = index.checked_sub(1).and_then(|i| self.posts.get(i));
        let next = self.posts.get(index + 1);
        (prev, next)
    }
}

/// Estimated reading time in whole minutes, at least one
pub fn reading_time(body: &str) -> usize {
    body.split_whitespace()
        .count()
        .div_ceil(WORDS_PER_MINUTE)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn post(id: &str, day: u32, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: format!("Post {id}"),
            description: format!("About {id}"),
            published_at: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
            updated_at: None,
            author: "jane".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            draft: false,
            featured: false,
            body: String::new(),
        }
    }

    fn sample() -> Vec<BlogPost> {
        let mut draft = post("draft", 20, &["Rust"]);
        draft.draft = true;
        let mut featured = post("featured", 10, &["astro", "rust"]);
        featured.featured = true;
        vec![post("old", 1, &["Web"]), draft, featured, post("new", 15, &[])]
    }

    fn ids(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_published_sorted_newest_first() {
        let blog = Blog::published(&sample(), true);
        let order: Vec<_> = blog.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["new", "featured", "old"]);
    }

    #[test]
    fn test_drafts_kept_outside_production() {
        let blog = Blog::published(&sample(), false);
        assert_eq!(blog.posts().len(), 4);
        assert_eq!(blog.posts()[0].id, "draft");
    }

    #[test]
    fn test_featured() {
        let blog = Blog::published(&sample(), true);
        assert_eq!(ids(&blog.featured()), vec!["featured"]);
    }

    #[test]
    fn test_by_tag_is_case_insensitive() {
        let blog = Blog::published(&sample(), false);
        assert_eq!(ids(&blog.by_tag("RUST")), vec!["draft", "featured"]);
        assert_eq!(ids(&blog.by_tag("web")), vec!["old"]);
        assert!(blog.by_tag("missing").is_empty());
    }

    #[test]
    fn test_tags_unique_and_sorted() {
        let blog = Blog::published(&sample(), false);
        assert_eq!(blog.tags(), vec!["Rust", "Web", "astro", "rust"]);
    }

    #[test]
    fn test_prev_next() {
        let blog = Blog::published(&sample(), true);

        let (prev, next) = blog.prev_next("featured");
        assert_eq!(prev.map(|p| p.id.as_str()), Some("new"));
        assert_eq!(next.map(|p| p.id.as_str()), Some("old"));

        let (prev, next) = blog.prev_next("new");
        assert!(prev.is_none());
        assert_eq!(next.map(|p| p.id.as_str()), Some("featured"));

        assert_eq!(blog.prev_next("nope"), (None, None));
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
        assert_eq!(reading_time(&"word\n".repeat(1000)), 5);
    }

    #[test]
    fn test_load_posts_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(
            &path,
            r#"[{
                "id": "hello",
                "title": "Hello",
                "description": "First post",
                "publishedAt": "2024-03-01T00:00:00Z",
                "author": "jane",
                "tags": ["intro"]
            }]"#,
        )
        .unwrap();

        let posts = load_posts(&path).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "hello");
        assert!(!posts[0].draft);
        assert_eq!(posts[0].tags, vec!["intro"]);
    }
}
