// ABOUTME: Parser for the Feedpress hosting namespace; channel-level only.

use crate::builder::{EpisodeBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::extract::text_or_none;
use crate::namespace::FeedNamespace;
use crate::parser::NamespaceParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedpressParser;

impl NamespaceParser for FeedpressParser {
    fn namespace(&self) -> FeedNamespace {
        FeedNamespace::Feedpress
    }

    fn parse_channel(&self, element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
        match element.local_name() {
            "newsletterId" => builder.with_feedpress(|b| b.newsletter_id(text_or_none(element))),
            "locale" => builder.with_feedpress(|b| b.locale(text_or_none(element))),
            "podcastId" => builder.with_feedpress(|b| b.podcast_id(text_or_none(element))),
            "cssFile" => builder.with_feedpress(|b| b.css_file(text_or_none(element))),
            "link" => builder.with_feedpress(|b| b.link(text_or_none(element))),
            _ => builder,
        }
    }

    fn parse_item(&self, _element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FeedpressBuilder;
    use pretty_assertions::assert_eq;

    const FEEDPRESS: &str = "https://feed.press/xmlns";

    #[test]
    fn test_channel_elements() {
        let builder = [
            Element::new(Some(FEEDPRESS), "newsletterId").with_text("abc123"),
            Element::new(Some(FEEDPRESS), "locale").with_text("en"),
            Element::new(Some(FEEDPRESS), "podcastId").with_text("podcast"),
        ]
        .iter()
        .fold(PodcastBuilder::default(), |b, e| FeedpressParser.parse_channel(e, b));

        let expected = FeedpressBuilder::default()
            .newsletter_id(Some("abc123".into()))
            .locale(Some("en".into()))
            .podcast_id(Some("podcast".into()));
        assert_eq!(builder, PodcastBuilder::default().with_feedpress(|_| expected));
    }

    #[test]
    fn test_items_are_ignored() {
        let element = Element::new(Some(FEEDPRESS), "link").with_text("https://example.com");
        assert_eq!(
            FeedpressParser.parse_item(&element, EpisodeBuilder::default()),
            EpisodeBuilder::default()
        );
    }
}
