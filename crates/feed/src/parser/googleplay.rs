// ABOUTME: Parser for the Google Play podcasts namespace at channel and item level.

use crate::builder::{Builder, EpisodeBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::extract::{
    text_as_bool, text_or_none, to_href_only_image_builder, to_itunes_category_builder,
};
use crate::namespace::FeedNamespace;
use crate::parser::{log_dropped, NamespaceParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct GooglePlayParser;

impl NamespaceParser for GooglePlayParser {
    fn namespace(&self) -> FeedNamespace {
        FeedNamespace::GooglePlay
    }

    fn parse_channel(&self, element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
        match element.local_name() {
            "author" => builder.with_googleplay(|b| b.author(text_or_none(element))),
            "owner" => builder.with_googleplay(|b| b.owner(text_or_none(element))),
            "description" => builder.with_googleplay(|b| b.description(text_or_none(element))),
            "new-feed-url" => builder.with_googleplay(|b| b.new_feed_url(text_or_none(element))),
            "explicit" => match text_as_bool(element) {
                Some(explicit) => builder.with_googleplay(|b| b.explicit(Some(explicit))),
                None => {
                    log_dropped(element, "explicit is not a boolean");
                    builder
                }
            },
            "block" => builder.with_googleplay(|b| b.block(text_as_bool(element) == Some(true))),
            "category" => {
                let category = to_itunes_category_builder(element);
                if !category.has_enough_data_to_build() {
                    log_dropped(element, "category without text attribute");
                    return builder;
                }
                builder.with_googleplay(|b| b.add_category_builder(category))
            }
            "image" => {
                let image = to_href_only_image_builder(element);
                if !image.has_enough_data_to_build() {
                    log_dropped(element, "image without href");
                    return builder;
                }
                builder.with_googleplay(|b| b.image_builder(image))
            }
            _ => builder,
        }
    }

    fn parse_item(&self, element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
        match element.local_name() {
            "description" => builder.with_googleplay(|b| b.description(text_or_none(element))),
            "explicit" => match text_as_bool(element) {
                Some(explicit) => builder.with_googleplay(|b| b.explicit(Some(explicit))),
                None => {
                    log_dropped(element, "explicit is not a boolean");
                    builder
                }
            },
            "block" => builder.with_googleplay(|b| b.block(text_as_bool(element) == Some(true))),
            "image" => {
                let image = to_href_only_image_builder(element);
                if !image.has_enough_data_to_build() {
                    log_dropped(element, "image without href");
                    return builder;
                }
                builder.with_googleplay(|b| b.image_builder(image))
            }
            _ => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{HrefOnlyImageBuilder, ItunesCategoryBuilder, PodcastGooglePlayBuilder};
    use pretty_assertions::assert_eq;

    const GOOGLEPLAY: &str = "http://www.google.com/schemas/play-podcasts/1.0";

    fn googleplay(name: &str) -> Element {
        Element::new(Some(GOOGLEPLAY), name)
    }

    #[test]
    fn test_channel_elements() {
        let builder = [
            googleplay("author").with_text("Author"),
            googleplay("owner").with_text("owner@example.com"),
            googleplay("category").with_attribute("text", "Technology"),
            googleplay("block").with_text("yes"),
            googleplay("image").with_attribute("href", "https://example.com/gp.jpg"),
        ]
        .iter()
        .fold(PodcastBuilder::default(), |b, e| GooglePlayParser.parse_channel(e, b));

        let expected = PodcastGooglePlayBuilder::default()
            .author(Some("Author".into()))
            .owner(Some("owner@example.com".into()))
            .add_category_builder(ItunesCategoryBuilder::default().name("Technology"))
            .block(true)
            .image_builder(HrefOnlyImageBuilder::default().href("https://example.com/gp.jpg"));
        assert_eq!(builder, PodcastBuilder::default().with_googleplay(|_| expected));
    }

    #[test]
    fn test_image_without_href_is_dropped() {
        let builder = GooglePlayParser.parse_item(&googleplay("image"), EpisodeBuilder::default());
        assert_eq!(builder, EpisodeBuilder::default());
    }

    #[test]
    fn test_invalid_explicit_keeps_earlier_value() {
        let channel = [
            googleplay("explicit").with_text("yes"),
            googleplay("explicit").with_text("clean"),
        ];
        let podcast = channel
            .iter()
            .fold(PodcastBuilder::default(), |b, e| GooglePlayParser.parse_channel(e, b));
        let expected = PodcastGooglePlayBuilder::default().explicit(Some(true));
        assert_eq!(podcast, PodcastBuilder::default().with_googleplay(|_| expected));

        let episode = channel
            .iter()
            .fold(EpisodeBuilder::default(), |b, e| GooglePlayParser.parse_item(e, b));
        let expected = crate::builder::EpisodeGooglePlayBuilder::default().explicit(Some(true));
        assert_eq!(episode, EpisodeBuilder::default().with_googleplay(|_| expected));
    }
}
