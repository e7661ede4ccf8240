// Content validation: invariants the generators rely on

use portfolio_kit_core::{ContentSnapshot, Locale, slugify, unslugify};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_snapshot(snapshot: &ContentSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_posts(snapshot, &mut report);
    check_case_studies(snapshot, &mut report);

    for locale in Locale::ALL {
        let count = snapshot
            .posts()
            .iter()
            .filter(|p| p.language == locale)
            .count();
        report
            .info
            .push(format!("{} posts ({})", count, locale.native_name()));
    }
    report
        .info
        .push(format!("{} case studies", snapshot.case_studies().len()));

    report
}

fn check_posts(snapshot: &ContentSnapshot, report: &mut ValidationReport) {
    let mut seen: HashSet<(&str, Locale)> = HashSet::new();
    // slug → first spelling seen, per locale
    let mut category_spellings: HashMap<(Locale, String), &str> = HashMap::new();

    for post in snapshot.posts() {
        if post.slug.trim().is_empty() {
            report
                .errors
                .push(format!("Post '{}' has an empty slug", post.title));
            continue;
        }

        if !seen.insert((post.slug.as_str(), post.language)) {
            report.errors.push(format!(
                "Duplicate post slug '{}' for language '{}'",
                post.slug, post.language
            ));
        }

        if !is_url_safe(&post.slug) {
            report.warnings.push(format!(
                "Post slug '{}' is not URL-safe (use lowercase letters, digits and '-')",
                post.slug
            ));
        }

        if post.category.trim().is_empty() {
            report.errors.push(format!(
                "Post '{}' ({}) has an empty category",
                post.slug, post.language
            ));
            continue;
        }

        let key = (post.language, slugify(&post.category));
        match category_spellings.get(&key) {
            Some(first) if *first != post.category => {
                report.warnings.push(format!(
                    "Categories '{}' and '{}' share the route '{}' ({}), listed as '{}'",
                    first,
                    post.category,
                    key.1,
                    post.language,
                    unslugify(&key.1)
                ));
            }
            Some(_) => {}
            None => {
                category_spellings.insert(key, &post.category);
            }
        }
    }
}

fn check_case_studies(snapshot: &ContentSnapshot, report: &mut ValidationReport) {
    let mut seen: HashSet<&str> = HashSet::new();

    for case_study in snapshot.case_studies() {
        if case_study.slug.trim().is_empty() {
            report.errors.push(format!(
                "Case study '{}' has an empty slug",
                case_study.title
            ));
            continue;
        }

        if !seen.insert(&case_study.slug) {
            report.errors.push(format!(
                "Duplicate case study slug '{}'",
                case_study.slug
            ));
        }

        if !is_url_safe(&case_study.slug) {
            report.warnings.push(format!(
                "Case study slug '{}' is not URL-safe",
                case_study.slug
            ));
        }

        if case_study.primary_tag().is_none() {
            report.warnings.push(format!(
                "Case study '{}' has no tags (no primary category)",
                case_study.slug
            ));
        }
    }
}

fn is_url_safe(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
