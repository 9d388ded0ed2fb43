// ABOUTME: Core RSS 2.0 channel and item fields, read from elements in the channel's own namespace.
// ABOUTME: Items themselves are dispatched by the assembler so extension parsers can see them.

use crate::builder::{Builder, EnclosureBuilder, EpisodeBuilder, GuidBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::extract::{
    attribute_value, parse_bool, parse_u64, text_as_date, text_as_int, text_or_none,
    to_rss_category_builder, to_rss_image_builder,
};
use crate::parser::log_dropped;

pub(crate) fn parse_channel_element(element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
    match element.local_name() {
        "title" => match text_or_none(element) {
            Some(title) => builder.title(title),
            None => builder,
        },
        "link" => match text_or_none(element) {
            Some(link) => builder.link(link),
            None => builder,
        },
        "description" => match text_or_none(element) {
            Some(description) => builder.description(description),
            None => builder,
        },
        "language" => match text_or_none(element) {
            Some(language) => builder.language(language),
            None => builder,
        },
        "pubDate" => match text_as_date(element) {
            Some(date) => builder.pub_date(Some(date)),
            None => {
                log_dropped(element, "unparseable date");
                builder
            }
        },
        "lastBuildDate" => match text_as_date(element) {
            Some(date) => builder.last_build_date(Some(date)),
            None => {
                log_dropped(element, "unparseable date");
                builder
            }
        },
        "generator" => builder.generator(text_or_none(element)),
        "copyright" => builder.copyright(text_or_none(element)),
        "docs" => builder.docs(text_or_none(element)),
        "managingEditor" => builder.managing_editor(text_or_none(element)),
        "webMaster" => builder.web_master(text_or_none(element)),
        "ttl" => builder.ttl(text_as_int(element)),
        "image" => {
            let image = to_rss_image_builder(element, element.namespace());
            if image.has_enough_data_to_build() {
                builder.image_builder(image)
            } else {
                log_dropped(element, "image needs url, title and link");
                builder
            }
        }
        "category" => match to_rss_category_builder(element) {
            Some(category) => builder.add_category_builder(category),
            None => {
                log_dropped(element, "blank category");
                builder
            }
        },
        _ => builder,
    }
}

pub(crate) fn parse_item_element(element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
    match element.local_name() {
        "title" => match text_or_none(element) {
            Some(title) => builder.title(title),
            None => builder,
        },
        "link" => builder.link(text_or_none(element)),
        "description" => builder.description(text_or_none(element)),
        "author" => builder.author(text_or_none(element)),
        "comments" => builder.comments(text_or_none(element)),
        "source" => builder.source(text_or_none(element)),
        "category" => match to_rss_category_builder(element) {
            Some(category) => builder.add_category_builder(category),
            None => {
                log_dropped(element, "blank category");
                builder
            }
        },
        "enclosure" => {
            let enclosure = to_enclosure_builder(element);
            if enclosure.has_enough_data_to_build() {
                builder.enclosure_builder(enclosure)
            } else {
                log_dropped(element, "enclosure needs url, numeric length and type");
                builder
            }
        }
        "guid" => match text_or_none(element) {
            Some(text) => builder.guid_builder(
                GuidBuilder::default()
                    .text(text)
                    .is_permalink(parse_bool(element.attribute("isPermaLink"))),
            ),
            None => builder,
        },
        "pubDate" => match text_as_date(element) {
            Some(date) => builder.pub_date(Some(date)),
            None => {
                log_dropped(element, "unparseable date");
                builder
            }
        },
        _ => builder,
    }
}

fn to_enclosure_builder(element: &Element) -> EnclosureBuilder {
    let mut enclosure = EnclosureBuilder::default();
    if let Some(url) = attribute_value(element, "url") {
        enclosure = enclosure.url(url);
    }
    if let Some(length) = attribute_value(element, "length").as_deref().and_then(parse_u64) {
        enclosure = enclosure.length(length);
    }
    if let Some(mime_type) = attribute_value(element, "type") {
        enclosure = enclosure.mime_type(mime_type);
    }
    enclosure
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item_with(children: Vec<Element>) -> EpisodeBuilder {
        children
            .iter()
            .fold(EpisodeBuilder::default(), |b, child| parse_item_element(child, b))
    }

    #[test]
    fn test_item_with_title_and_enclosure_builds() {
        let episode = item_with(vec![
            Element::new(None, "title").with_text("Episode 1"),
            Element::new(None, "enclosure")
                .with_attribute("url", "https://example.com/1.mp3")
                .with_attribute("length", "5650889")
                .with_attribute("type", "audio/mpeg"),
            Element::new(None, "guid")
                .with_attribute("isPermaLink", "false")
                .with_text("ep-1"),
            Element::new(None, "pubDate").with_text("Fri, 21 Feb 2020 10:00:00 GMT"),
        ])
        .build()
        .unwrap();

        assert_eq!(episode.enclosure.length, 5_650_889);
        assert_eq!(episode.guid.as_ref().and_then(|g| g.is_permalink), Some(false));
        assert!(episode.pub_date.is_some());
    }

    #[test]
    fn test_enclosure_with_bad_length_is_not_ready() {
        let builder = item_with(vec![
            Element::new(None, "title").with_text("Episode 1"),
            Element::new(None, "enclosure")
                .with_attribute("url", "https://example.com/1.mp3")
                .with_attribute("length", "unknown")
                .with_attribute("type", "audio/mpeg"),
        ]);
        assert!(!builder.has_enough_data_to_build());
    }

    #[test]
    fn test_broken_enclosure_keeps_earlier_valid_one() {
        let episode = item_with(vec![
            Element::new(None, "title").with_text("Episode 1"),
            Element::new(None, "enclosure")
                .with_attribute("url", "https://example.com/1.mp3")
                .with_attribute("length", "100")
                .with_attribute("type", "audio/mpeg"),
            Element::new(None, "enclosure").with_attribute("url", "https://example.com/2.mp3"),
        ])
        .build()
        .unwrap();

        assert_eq!(episode.enclosure.url, "https://example.com/1.mp3");
        assert_eq!(episode.enclosure.length, 100);
    }

    #[test]
    fn test_incomplete_image_keeps_earlier_valid_one() {
        let image = |children: Vec<Element>| {
            children
                .into_iter()
                .fold(Element::new(None, "image"), |image, child| image.with_child(child))
        };
        let builder = [
            image(vec![
                Element::new(None, "url").with_text("https://example.com/i.png"),
                Element::new(None, "title").with_text("Show"),
                Element::new(None, "link").with_text("https://example.com"),
            ]),
            image(vec![Element::new(None, "url").with_text("https://example.com/other.png")]),
        ]
        .iter()
        .fold(PodcastBuilder::default(), |b, child| parse_channel_element(child, b));

        let expected = PodcastBuilder::default().image_builder(
            crate::builder::RssImageBuilder::default()
                .url("https://example.com/i.png")
                .title("Show")
                .link("https://example.com"),
        );
        assert_eq!(builder, expected);
    }

    #[test]
    fn test_channel_core_fields() {
        let builder = [
            Element::new(None, "title").with_text(" Show "),
            Element::new(None, "ttl").with_text("60"),
            Element::new(None, "category").with_text(" "),
            Element::new(None, "category").with_text("Technology"),
            Element::new(None, "unknownElement").with_text("ignored"),
        ]
        .iter()
        .fold(PodcastBuilder::default(), |b, child| parse_channel_element(child, b));

        let expected = PodcastBuilder::default()
            .title("Show")
            .ttl(Some(60))
            .add_category_builder(crate::builder::RssCategoryBuilder::default().name("Technology"));
        assert_eq!(builder, expected);
    }
}
