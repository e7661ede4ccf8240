//! Category and tag aggregation.
//!
//! Every listing is ordered by how many records carry the value, most
//! frequent first. Equal counts keep the order in which the values were
//! first seen in the collection.

use portfolio_kit_core::{CaseStudy, ContentSnapshot, Locale, Post, slugify};
use std::collections::HashMap;

/// Distinct categories across every language.
pub fn all_categories(snapshot: &ContentSnapshot) -> Vec<String> {
    rank_by_frequency(snapshot.posts().iter().map(|p| p.category.as_str()))
}

/// Distinct categories of one language partition.
pub fn categories_by_language(snapshot: &ContentSnapshot, locale: Locale) -> Vec<String> {
    rank_by_frequency(
        snapshot
            .posts()
            .iter()
            .filter(|p| p.language == locale)
            .map(|p| p.category.as_str()),
    )
}

/// Distinct case-study tags.
pub fn all_tags(snapshot: &ContentSnapshot) -> Vec<String> {
    rank_by_frequency(
        snapshot
            .case_studies()
            .iter()
            .flat_map(|c| c.tags.iter().map(String::as_str)),
    )
}

/// Posts of one language whose category routes to `category_slug`, newest first.
pub fn posts_in_category<'a>(
    snapshot: &'a ContentSnapshot,
    locale: Locale,
    category_slug: &str,
) -> Vec<&'a Post> {
    snapshot
        .posts_by_language(locale)
        .into_iter()
        .filter(|p| slugify(&p.category) == category_slug)
        .collect()
}

/// Case studies carrying a tag that routes to `tag_slug`, newest first.
pub fn case_studies_with_tag<'a>(snapshot: &'a ContentSnapshot, tag_slug: &str) -> Vec<&'a CaseStudy> {
    snapshot
        .featured_work()
        .into_iter()
        .filter(|c| c.tags.iter().any(|t| slugify(t) == tag_slug))
        .collect()
}

fn rank_by_frequency<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    // Stable: ties stay in first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use portfolio_kit_core::Client;
    use std::collections::HashSet;

    fn date(s: &str) -> DateTime<Utc> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
    }

    fn post(slug: &str, day: &str, language: Locale, category: &str) -> Post {
        Post {
            slug: slug.to_string(),
            language,
            title: slug.to_string(),
            description: String::new(),
            category: category.to_string(),
            date: date(day),
            time_to_read: 1,
            image: None,
            url: format!("/{}/blog/{}", language, slug),
        }
    }

    fn case_study(slug: &str, day: &str, tags: &[&str]) -> CaseStudy {
        CaseStudy {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: date(day),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            client: Client {
                name: "Client".to_string(),
                logo: None,
                website: None,
            },
            description: String::new(),
            project_duration: None,
            project_url: None,
            images: None,
            testimonial: None,
            url: format!("/work/{}", slug),
        }
    }

    fn example() -> ContentSnapshot {
        ContentSnapshot::new(
            vec![
                post("a", "2024-01-01", Locale::En, "Tech"),
                post("b", "2024-02-01", Locale::En, "Tech"),
                post("c", "2024-01-15", Locale::Fr, "Vie"),
            ],
            vec![],
        )
    }

    #[test]
    fn test_all_categories_example() {
        assert_eq!(all_categories(&example()), vec!["Tech", "Vie"]);
    }

    #[test]
    fn test_categories_by_language_example() {
        let snapshot = example();
        assert_eq!(categories_by_language(&snapshot, Locale::Fr), vec!["Vie"]);
        assert_eq!(categories_by_language(&snapshot, Locale::En), vec!["Tech"]);
    }

    #[test]
    fn test_empty_collection() {
        let snapshot = ContentSnapshot::default();
        assert!(all_categories(&snapshot).is_empty());
        assert!(categories_by_language(&snapshot, Locale::En).is_empty());
        assert!(all_tags(&snapshot).is_empty());
    }

    #[test]
    fn test_frequency_order_with_stable_ties() {
        let snapshot = ContentSnapshot::new(
            vec![
                post("1", "2024-01-01", Locale::En, "Career"),
                post("2", "2024-01-02", Locale::En, "Tech"),
                post("3", "2024-01-03", Locale::En, "Life"),
                post("4", "2024-01-04", Locale::Fr, "Tech"),
                post("5", "2024-01-05", Locale::En, "Life"),
                post("6", "2024-01-06", Locale::En, "Books"),
            ],
            vec![],
        );

        // Tech=2, Life=2 (Tech seen first), then Career=1, Books=1 (Career seen first)
        assert_eq!(
            all_categories(&snapshot),
            vec!["Tech", "Life", "Career", "Books"]
        );
    }

    #[test]
    fn test_distinct_and_non_increasing_counts() {
        let snapshot = ContentSnapshot::new(
            (0..30)
                .map(|i| {
                    let category = ["A", "B", "C", "D"][(i * i + i / 3) % 4];
                    let language = if i % 3 == 0 { Locale::Fr } else { Locale::En };
                    post(&i.to_string(), "2024-01-01", language, category)
                })
                .collect(),
            vec![],
        );

        let categories = all_categories(&snapshot);
        let count = |c: &str| snapshot.posts().iter().filter(|p| p.category == c).count();

        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        for pair in categories.windows(2) {
            assert!(count(pair[0].as_str()) >= count(pair[1].as_str()));
        }

        for category in categories_by_language(&snapshot, Locale::En) {
            assert!(
                snapshot
                    .posts()
                    .iter()
                    .any(|p| p.category == category && p.language == Locale::En)
            );
        }
    }

    #[test]
    fn test_all_tags() {
        let snapshot = ContentSnapshot::new(
            vec![],
            vec![
                case_study("one", "2023-01-01", &["Web", "React"]),
                case_study("two", "2023-02-01", &["Mobile", "React"]),
                case_study("three", "2023-03-01", &["Web"]),
            ],
        );

        assert_eq!(all_tags(&snapshot), vec!["Web", "React", "Mobile"]);
    }

    #[test]
    fn test_posts_in_category() {
        let snapshot = ContentSnapshot::new(
            vec![
                post("a", "2024-01-01", Locale::En, "Web Development"),
                post("b", "2024-03-01", Locale::En, "Web Development"),
                post("c", "2024-02-01", Locale::Fr, "Web Development"),
                post("d", "2024-02-01", Locale::En, "Tech"),
            ],
            vec![],
        );

        let slugs: Vec<_> = posts_in_category(&snapshot, Locale::En, "web-development")
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["b", "a"]);
        assert!(posts_in_category(&snapshot, Locale::Fr, "tech").is_empty());
    }

    #[test]
    fn test_case_studies_with_tag() {
        let snapshot = ContentSnapshot::new(
            vec![],
            vec![
                case_study("one", "2023-01-01", &["Full Stack"]),
                case_study("two", "2023-05-01", &["Mobile", "Full Stack"]),
                case_study("three", "2023-03-01", &["Mobile"]),
            ],
        );

        let slugs: Vec<_> = case_studies_with_tag(&snapshot, "full-stack")
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["two", "one"]);
    }
}
