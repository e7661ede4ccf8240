//! Previous/next post resolution for the post footer.

use portfolio_kit_core::{ContentSnapshot, Locale, Post};

/// Posts adjacent to the current one. Either side may be absent at the
/// boundaries of the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjacent<'a> {
    /// Element just before the current post in the (newest-first) sequence
    pub previous: Option<&'a Post>,
    /// Element just after the current post in the (newest-first) sequence
    pub next: Option<&'a Post>,
}

impl Adjacent<'_> {
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Resolve neighbours of `slug` in an already partitioned, newest-first
/// sequence. An unknown slug yields no neighbours.
pub fn adjacent<'a>(posts: &[&'a Post], slug: &str) -> Adjacent<'a> {
    let Some(index) = posts.iter().position(|p| p.slug == slug) else {
        return Adjacent::default();
    };

    Adjacent {
        previous: index.checked_sub(1).map(|i| posts[i]),
        next: posts.get(index + 1).copied(),
    }
}

/// Neighbours of `slug` within its language partition.
pub fn adjacent_in_language<'a>(
    snapshot: &'a ContentSnapshot,
    locale: Locale,
    slug: &str,
) -> Adjacent<'a> {
    adjacent(&snapshot.posts_by_language(locale), slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn post(slug: &str, day: &str, language: Locale) -> Post {
        Post {
            slug: slug.to_string(),
            language,
            title: slug.to_string(),
            description: String::new(),
            category: "Tech".to_string(),
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
            time_to_read: 1,
            image: None,
            url: format!("/{}/blog/{}", language, slug),
        }
    }

    fn slugs(adj: Adjacent<'_>) -> (Option<&str>, Option<&str>) {
        (
            adj.previous.map(|p| p.slug.as_str()),
            adj.next.map(|p| p.slug.as_str()),
        )
    }

    fn snapshot() -> ContentSnapshot {
        ContentSnapshot::new(
            vec![
                post("oldest", "2024-01-01", Locale::En),
                post("newest", "2024-03-01", Locale::En),
                post("middle", "2024-02-01", Locale::En),
                post("seul", "2024-02-15", Locale::Fr),
            ],
            vec![],
        )
    }

    #[test]
    fn test_boundaries() {
        let snapshot = snapshot();

        assert_eq!(
            slugs(adjacent_in_language(&snapshot, Locale::En, "newest")),
            (None, Some("middle"))
        );
        assert_eq!(
            slugs(adjacent_in_language(&snapshot, Locale::En, "middle")),
            (Some("newest"), Some("oldest"))
        );
        assert_eq!(
            slugs(adjacent_in_language(&snapshot, Locale::En, "oldest")),
            (Some("middle"), None)
        );
    }

    #[test]
    fn test_single_post_partition() {
        let snapshot = snapshot();
        let adj = adjacent_in_language(&snapshot, Locale::Fr, "seul");
        assert!(adj.is_empty());
    }

    #[test]
    fn test_partitions_do_not_mix() {
        // "seul" sits between "newest" and "middle" by date but is French
        let snapshot = snapshot();
        let adj = adjacent_in_language(&snapshot, Locale::En, "newest");
        assert_eq!(adj.next.map(|p| p.language), Some(Locale::En));
    }

    #[test]
    fn test_unknown_slug() {
        let snapshot = snapshot();
        assert!(adjacent_in_language(&snapshot, Locale::En, "missing").is_empty());
        assert!(adjacent_in_language(&snapshot, Locale::Fr, "newest").is_empty());
        assert!(adjacent(&[], "anything").is_empty());
    }
}
