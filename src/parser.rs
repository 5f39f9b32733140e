//! Feed parsing: decoding the export document into the data model

use std::io::BufRead;

use rss::{Channel, Item};

use crate::error::Result;
use crate::models::{Category, CategoryKind, Entry, Feed};

/// Decode a WordPress export document into a [`Feed`].
///
/// The export is an RSS channel whose items carry the post body as a
/// `content:encoded` character-data block and the post slug in the
/// `wp:post_name` extension element. Categories and tags arrive as repeated
/// `<category>` elements distinguished by their `domain` attribute.
///
/// Malformed XML or a non-feed document fails the whole run; missing item
/// fields simply decode as empty strings.
pub fn parse_feed<R: BufRead>(reader: R) -> Result<Feed> {
    let channel = Channel::read_from(reader)?;
    Ok(Feed {
        channel_title: channel.title().to_string(),
        channel_link: channel.link().to_string(),
        entries: channel.items().iter().map(entry_from_item).collect(),
    })
}

fn entry_from_item(item: &Item) -> Entry {
    Entry {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        pubdate: item.pub_date().unwrap_or_default().to_string(),
        slug: wp_post_name(item).unwrap_or_default().to_string(),
        body_html: item.content().unwrap_or_default().to_string(),
        categories: item.categories().iter().map(category_from_item).collect(),
    }
}

/// The slug lives in the `wp` extension namespace, one value per item.
fn wp_post_name(item: &Item) -> Option<&str> {
    item.extensions().get("wp")?.get("post_name")?.first()?.value()
}

fn category_from_item(category: &rss::Category) -> Category {
    Category {
        kind: CategoryKind::from_domain(category.domain()),
        label: category.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"
  xmlns:content="http://purl.org/rss/1.0/modules/content/"
  xmlns:wp="http://wordpress.org/export/1.2/">
  <channel>
    <title>Jennifer's Blog</title>
    <link>https://jennifermack.net</link>
    <item>
      <title>Rome, Day One</title>
      <link>https://jennifermack.net/2015/03/27/rome-day-one/</link>
      <pubDate>Fri, 27 Mar 2015 12:00:00 -0400</pubDate>
      <wp:post_name>rome-day-one</wp:post_name>
      <category domain="category"><![CDATA[Travel]]></category>
      <category domain="post_tag"><![CDATA[Italy]]></category>
      <category domain="nav_menu"><![CDATA[Primary]]></category>
      <content:encoded><![CDATA[<p>First day in Rome.</p>]]></content:encoded>
    </item>
    <item>
      <title>Draft Note</title>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_feed_channel_fields() {
        let feed = parse_feed(EXPORT.as_bytes()).unwrap();
        assert_eq!(feed.channel_title, "Jennifer's Blog");
        assert_eq!(feed.channel_link, "https://jennifermack.net");
        assert_eq!(feed.entries.len(), 2);
    }

    #[test]
    fn test_parse_feed_entry_fields() {
        let feed = parse_feed(EXPORT.as_bytes()).unwrap();
        let entry = &feed.entries[0];
        assert_eq!(entry.title, "Rome, Day One");
        assert_eq!(entry.link, "https://jennifermack.net/2015/03/27/rome-day-one/");
        assert_eq!(entry.pubdate, "Fri, 27 Mar 2015 12:00:00 -0400");
        assert_eq!(entry.slug, "rome-day-one");
        assert_eq!(entry.body_html, "<p>First day in Rome.</p>");
    }

    #[test]
    fn test_parse_feed_category_domains() {
        let feed = parse_feed(EXPORT.as_bytes()).unwrap();
        let categories = &feed.entries[0].categories;
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].kind, CategoryKind::Category);
        assert_eq!(categories[0].label, "Travel");
        assert_eq!(categories[1].kind, CategoryKind::PostTag);
        assert_eq!(categories[1].label, "Italy");
        assert_eq!(categories[2].kind, CategoryKind::Other);
    }

    #[test]
    fn test_parse_feed_missing_fields_default_empty() {
        let feed = parse_feed(EXPORT.as_bytes()).unwrap();
        let entry = &feed.entries[1];
        assert_eq!(entry.title, "Draft Note");
        assert_eq!(entry.link, "");
        assert_eq!(entry.pubdate, "");
        assert_eq!(entry.slug, "");
        assert_eq!(entry.body_html, "");
        assert!(entry.categories.is_empty());
    }

    #[test]
    fn test_parse_feed_malformed_document() {
        assert!(matches!(
            parse_feed("this is not xml".as_bytes()),
            Err(Error::Feed(_))
        ));
    }

    #[test]
    fn test_parse_feed_non_feed_document() {
        assert!(matches!(
            parse_feed("<inventory></inventory>".as_bytes()),
            Err(Error::Feed(_))
        ));
    }
}
