//! JSON Feed version 1 rendering.

use super::Feed;
use anyhow::Result;
use serde::Serialize;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: &'a str,
    description: &'a str,
    icon: &'a str,
    favicon: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'static str>,
    author: JsonAuthor<'a>,
    items: Vec<JsonItem<'a>>,
}

#[derive(Serialize)]
struct JsonAuthor<'a> {
    name: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    summary: &'a str,
    content_text: &'a str,
    date_published: String,
    date_modified: String,
    author: JsonAuthor<'a>,
}

pub(super) fn render(feed: &Feed) -> Result<String> {
    let meta = &feed.meta;

    let doc = JsonFeed {
        version: JSON_FEED_VERSION,
        title: &meta.title,
        home_page_url: &meta.link,
        feed_url: &meta.links.json,
        description: &meta.description,
        icon: &meta.image,
        favicon: &meta.favicon,
        language: meta.language.map(|l| l.as_str()),
        author: JsonAuthor {
            name: &meta.author.name,
            url: &meta.author.link,
        },
        items: feed
            .entries
            .iter()
            .map(|entry| JsonItem {
                id: &entry.id,
                url: &entry.link,
                title: &entry.title,
                summary: &entry.description,
                content_text: &entry.description,
                date_published: entry.published.to_rfc3339(),
                date_modified: entry.published.to_rfc3339(),
                author: JsonAuthor {
                    name: &entry.author.name,
                    url: &entry.author.link,
                },
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}
