//! Atom 1.0 rendering.

use super::{Feed, FeedAuthor, FeedEntry};
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

pub(super) fn render(feed: &Feed) -> Result<String> {
    let meta = &feed.meta;
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("feed");
    root.push_attribute(("xmlns", ATOM_NS));
    if let Some(locale) = meta.language {
        root.push_attribute(("xml:lang", locale.as_str()));
    }
    writer.write_event(Event::Start(root))?;

    write_text_element(&mut writer, "id", &meta.id)?;
    write_text_element(&mut writer, "title", &meta.title)?;
    write_text_element(&mut writer, "updated", &meta.updated.to_rfc3339())?;
    write_text_element(&mut writer, "generator", &meta.generator)?;
    write_empty_elem(&mut writer, "link", &[("rel", "alternate"), ("href", &meta.link)])?;
    write_empty_elem(&mut writer, "link", &[("rel", "self"), ("href", &meta.links.atom)])?;
    write_text_element(&mut writer, "subtitle", &meta.description)?;
    write_text_element(&mut writer, "logo", &meta.image)?;
    write_text_element(&mut writer, "icon", &meta.favicon)?;
    write_text_element(&mut writer, "rights", &meta.copyright)?;
    write_author(&mut writer, &meta.author)?;

    for entry in &feed.entries {
        write_entry(&mut writer, entry)?;
    }

    writer.write_event(Event::End(BytesEnd::new("feed")))?;

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_entry(writer: &mut XmlWriter, entry: &FeedEntry) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("entry")))?;

    write_text_element(writer, "title", &entry.title)?;
    write_text_element(writer, "id", &entry.id)?;
    write_empty_elem(writer, "link", &[("href", &entry.link)])?;
    write_text_element(writer, "updated", &entry.published.to_rfc3339())?;
    write_text_element(writer, "published", &entry.published.to_rfc3339())?;
    write_text_element(writer, "summary", &entry.description)?;
    write_author(writer, &entry.author)?;

    writer.write_event(Event::End(BytesEnd::new("entry")))?;
    Ok(())
}

fn write_author(writer: &mut XmlWriter, author: &FeedAuthor) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("author")))?;
    write_text_element(writer, "name", &author.name)?;
    write_text_element(writer, "email", &author.email)?;
    write_text_element(writer, "uri", &author.link)?;
    writer.write_event(Event::End(BytesEnd::new("author")))?;
    Ok(())
}

/// `<tag>text</tag>`, text escaped
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}
