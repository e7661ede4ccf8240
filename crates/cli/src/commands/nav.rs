use crate::project::Project;
use anyhow::Result;
use portfolio_kit_core::{ContentSnapshot, Locale, Post, SiteConfig, slugify};
use portfolio_kit_generator::{adjacent_in_language, posts_in_category};
use std::path::PathBuf;

/// Recommended articles shown under a post
const RECOMMENDED_LIMIT: usize = 3;

/// Show the footer navigation of one post
pub async fn run(path: PathBuf, locale: Locale, slug: String) -> Result<()> {
    let project = Project::load(&path)?;

    let Some(post) = project.snapshot.post_by_slug(&slug, locale) else {
        anyhow::bail!("No {} post with slug '{}'", locale.native_name(), slug);
    };

    print!("{}", render_footer(&project.snapshot, &project.config, post));
    Ok(())
}

fn render_footer(snapshot: &ContentSnapshot, config: &SiteConfig, post: &Post) -> String {
    let locale = post.language;
    let labels = locale.labels();
    let adjacent = adjacent_in_language(snapshot, locale, &post.slug);

    let link = |p: Option<&Post>| match p {
        Some(p) => format!("{} (/{}/blog/{})", p.title, p.language, p.slug),
        None => "-".to_string(),
    };

    let mut out = format!(
        "{}\n  {} {} · {} · {} {}\n  {}: {}\n  {}: {}\n  {}:\n",
        post.title,
        labels.written_by,
        config.author.name,
        locale.format_date(post.date),
        post.time_to_read,
        labels.min,
        labels.previous,
        link(adjacent.previous),
        labels.next,
        link(adjacent.next),
        labels.recommended_articles,
    );

    let recommended: Vec<&Post> = posts_in_category(snapshot, locale, &slugify(&post.category))
        .into_iter()
        .filter(|p| p.slug != post.slug)
        .take(RECOMMENDED_LIMIT)
        .collect();
    if recommended.is_empty() {
        out.push_str("    -\n");
    }
    for p in recommended {
        out.push_str(&format!("    {}\n", link(Some(p))));
    }

    out.push_str(&format!(
        "  {}: {}\n",
        labels.copy_link,
        post.permalink(&config.site.url)
    ));
    out
}
