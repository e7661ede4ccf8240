//! Route slugs for categories and tags.
//!
//! A slug is the lowercased name with each run of whitespace replaced by a
//! single `-`: `"Web Development"` → `"web-development"`.
//!
//! Leading and trailing whitespace is dropped rather than turned into a
//! `-`, so `" Tech "` and `"Tech"` share the slug `"tech"`.

pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Best-effort display name for a slug: hyphens become spaces and every word
/// is capitalized. `"web-development"` → `"Web Development"`.
///
/// Lossy: acronyms and inner capitals do not survive a round trip, so lookups
/// should compare slugs rather than unslugified names.
pub fn unslugify(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
