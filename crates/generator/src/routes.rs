//! Route parameters for the static page generator.
//!
//! Serialized with the same keys the page templates expect
//! (`locale`, `categorySlug`, `tagSlug`, `slug`).

use crate::aggregate::{all_tags, categories_by_language};
use portfolio_kit_core::{ContentSnapshot, Locale, slugify};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRoute {
    pub locale: Locale,
    pub category_slug: String,
}

impl CategoryRoute {
    pub fn path(&self) -> String {
        format!("/{}/blog/categories/{}", self.locale, self.category_slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRoute {
    pub tag_slug: String,
}

impl TagRoute {
    pub fn path(&self) -> String {
        format!("/work/categories/{}", self.tag_slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRoute {
    pub locale: Locale,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyRoute {
    pub slug: String,
}

/// Every route family, as printed by `portfolio-kit routes`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSurface {
    pub locales: Vec<Locale>,
    pub posts: Vec<PostRoute>,
    pub categories: Vec<CategoryRoute>,
    pub case_studies: Vec<CaseStudyRoute>,
    pub tags: Vec<TagRoute>,
}

/// One route per (locale, category present in that locale), in ranking order.
///
/// Two spellings that slugify identically produce a single route.
pub fn category_routes(snapshot: &ContentSnapshot) -> Vec<CategoryRoute> {
    let mut routes: Vec<CategoryRoute> = Vec::new();
    for locale in Locale::ALL {
        for category in categories_by_language(snapshot, locale) {
            let route = CategoryRoute {
                locale,
                category_slug: slugify(&category),
            };
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
    }
    routes
}

pub fn tag_routes(snapshot: &ContentSnapshot) -> Vec<TagRoute> {
    let mut routes: Vec<TagRoute> = Vec::new();
    for tag in all_tags(snapshot) {
        let route = TagRoute {
            tag_slug: slugify(&tag),
        };
        if !routes.contains(&route) {
            routes.push(route);
        }
    }
    routes
}

pub fn post_routes(snapshot: &ContentSnapshot) -> Vec<PostRoute> {
    snapshot
        .posts()
        .iter()
        .map(|p| PostRoute {
            locale: p.language,
            slug: p.slug.clone(),
        })
        .collect()
}

pub fn case_study_routes(snapshot: &ContentSnapshot) -> Vec<CaseStudyRoute> {
    snapshot
        .case_studies()
        .iter()
        .map(|c| CaseStudyRoute {
            slug: c.slug.clone(),
        })
        .collect()
}

pub fn route_surface(snapshot: &ContentSnapshot) -> RouteSurface {
    RouteSurface {
        locales: Locale::ALL.to_vec(),
        posts: post_routes(snapshot),
        categories: category_routes(snapshot),
        case_studies: case_study_routes(snapshot),
        tags: tag_routes(snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use portfolio_kit_core::{CaseStudy, Client, Post};

    fn post(slug: &str, language: Locale, category: &str) -> Post {
        Post {
            slug: slug.to_string(),
            language,
            title: slug.to_string(),
            description: String::new(),
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            time_to_read: 1,
            image: None,
            url: format!("/{}/blog/{}", language, slug),
        }
    }

    fn case_study(slug: &str, tags: &[&str]) -> CaseStudy {
        CaseStudy {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
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

    #[test]
    fn test_category_routes_per_locale() {
        let snapshot = ContentSnapshot::new(
            vec![
                post("a", Locale::En, "Web Development"),
                post("b", Locale::En, "Tech"),
                post("c", Locale::En, "Tech"),
                post("d", Locale::Fr, "Vie"),
            ],
            vec![],
        );

        let routes = category_routes(&snapshot);
        let paths: Vec<_> = routes.iter().map(CategoryRoute::path).collect();
        assert_eq!(
            paths,
            vec![
                "/en/blog/categories/tech",
                "/en/blog/categories/web-development",
                "/fr/blog/categories/vie",
            ]
        );
    }

    #[test]
    fn test_category_routes_collapse_spellings() {
        let snapshot = ContentSnapshot::new(
            vec![
                post("a", Locale::En, "Web Dev"),
                post("b", Locale::En, "web dev"),
            ],
            vec![],
        );
        assert_eq!(category_routes(&snapshot).len(), 1);
    }

    #[test]
    fn test_tag_routes() {
        let snapshot = ContentSnapshot::new(
            vec![],
            vec![
                case_study("one", &["Developer Senior Full Stack", "React"]),
                case_study("two", &["React"]),
            ],
        );

        let tags: Vec<_> = tag_routes(&snapshot).into_iter().map(|t| t.tag_slug).collect();
        assert_eq!(tags, vec!["react", "developer-senior-full-stack"]);
    }

    #[test]
    fn test_route_surface_json_keys() {
        let snapshot = ContentSnapshot::new(
            vec![post("a", Locale::Fr, "Vie")],
            vec![case_study("acme", &["Web"])],
        );

        let json = serde_json::to_value(route_surface(&snapshot)).unwrap();
        assert_eq!(json["locales"], serde_json::json!(["en", "fr"]));
        assert_eq!(
            json["categories"][0],
            serde_json::json!({ "locale": "fr", "categorySlug": "vie" })
        );
        assert_eq!(json["tags"][0], serde_json::json!({ "tagSlug": "web" }));
        assert_eq!(json["posts"][0], serde_json::json!({ "locale": "fr", "slug": "a" }));
        assert_eq!(json["caseStudies"][0], serde_json::json!({ "slug": "acme" }));
    }
}
