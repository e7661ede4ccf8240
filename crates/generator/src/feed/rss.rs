//! RSS 2.0 rendering.

use super::{Feed, FeedEntry};
use anyhow::{Result, anyhow};
use rss::{
    ChannelBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder,
    extension::atom::{AtomExtension, Link},
    validation::Validate,
};

const RSS2_DOCS: &str = "https://validator.w3.org/feed/docs/rss2.html";
const RSS2_MIME: &str = "application/rss+xml";

pub(super) fn render(feed: &Feed) -> Result<String> {
    let meta = &feed.meta;

    let image = ImageBuilder::default()
        .url(meta.image.clone())
        .title(meta.title.clone())
        .link(meta.link.clone())
        .build();

    let items: Vec<Item> = feed.entries.iter().map(to_item).collect();

    // <atom:link rel="self"> pointing at this document
    let mut self_link = Link::default();
    self_link.set_href(meta.links.rss2.clone());
    self_link.set_rel("self");
    self_link.set_mime_type(Some(RSS2_MIME.to_string()));
    let mut atom_ext = AtomExtension::default();
    atom_ext.set_links(vec![self_link]);

    let channel = ChannelBuilder::default()
        .title(meta.title.clone())
        .link(meta.link.clone())
        .description(meta.description.clone())
        .language(meta.language.map(|l| l.to_string()))
        .copyright(meta.copyright.clone())
        .generator(meta.generator.clone())
        .docs(RSS2_DOCS.to_string())
        .last_build_date(meta.updated.to_rfc2822())
        .image(image)
        .atom_ext(atom_ext)
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validate: {e}"))?;

    Ok(channel.to_string())
}

fn to_item(entry: &FeedEntry) -> Item {
    ItemBuilder::default()
        .title(entry.title.clone())
        .link(entry.link.clone())
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(entry.id.clone())
                .build(),
        )
        .description(entry.description.clone())
        .author(format!("{} ({})", entry.author.email, entry.author.name))
        .pub_date(entry.published.to_rfc2822())
        .build()
}
