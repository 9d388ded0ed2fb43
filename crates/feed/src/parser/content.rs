// ABOUTME: Parser for the RSS Content module; only item-level content:encoded is recognized.

use crate::builder::{EpisodeBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::extract::text_or_none;
use crate::namespace::FeedNamespace;
use crate::parser::{log_dropped, NamespaceParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentParser;

impl NamespaceParser for ContentParser {
    fn namespace(&self) -> FeedNamespace {
        FeedNamespace::Content
    }

    fn parse_channel(&self, _element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
        builder
    }

    fn parse_item(&self, element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
        if element.local_name() != "encoded" {
            return builder;
        }
        match text_or_none(element) {
            Some(encoded) => builder.with_content(|content| content.encoded(encoded)),
            None => {
                log_dropped(element, "empty content");
                builder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Builder, EnclosureBuilder};

    const CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";

    #[test]
    fn test_encoded_is_read() {
        let element = Element::new(Some(CONTENT), "encoded").with_text("<p>Show notes</p>");
        let episode = ContentParser
            .parse_item(&element, EpisodeBuilder::default())
            .title("Episode")
            .enclosure_builder(
                EnclosureBuilder::default()
                    .url("https://example.com/a.mp3")
                    .length(1)
                    .mime_type("audio/mpeg"),
            )
            .build()
            .unwrap();
        assert_eq!(
            episode.content.map(|c| c.encoded),
            Some("<p>Show notes</p>".to_string())
        );
    }

    #[test]
    fn test_blank_encoded_is_dropped() {
        let element = Element::new(Some(CONTENT), "encoded").with_text("   ");
        assert_eq!(
            ContentParser.parse_item(&element, EpisodeBuilder::default()),
            EpisodeBuilder::default()
        );
    }
}
