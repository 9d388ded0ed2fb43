// ABOUTME: Parser for the Apple Podcasts (iTunes) namespace at channel and item level.
// ABOUTME: Handles show metadata, owner, hierarchical categories, durations and episode numbering.

use crate::builder::{Builder, EpisodeBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::extract::{
    text_as_bool, text_as_duration, text_as_int, text_or_none, to_href_only_image_builder,
    to_itunes_category_builder, to_person_builder,
};
use crate::models::{EpisodeType, ShowType};
use crate::namespace::FeedNamespace;
use crate::parser::{log_dropped, NamespaceParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct ItunesParser;

/// `itunes:block` and `itunes:complete` only count when they say yes.
fn is_yes(element: &Element) -> bool {
    text_as_bool(element) == Some(true)
}

impl NamespaceParser for ItunesParser {
    fn namespace(&self) -> FeedNamespace {
        FeedNamespace::Itunes
    }

    fn parse_channel(&self, element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
        match element.local_name() {
            "author" => builder.with_itunes(|b| b.author(text_or_none(element))),
            "subtitle" => builder.with_itunes(|b| b.subtitle(text_or_none(element))),
            "summary" => builder.with_itunes(|b| b.summary(text_or_none(element))),
            "keywords" => builder.with_itunes(|b| b.keywords(text_or_none(element))),
            "title" => builder.with_itunes(|b| b.title(text_or_none(element))),
            "new-feed-url" => builder.with_itunes(|b| b.new_feed_url(text_or_none(element))),
            "block" => builder.with_itunes(|b| b.block(is_yes(element))),
            "complete" => builder.with_itunes(|b| b.complete(is_yes(element))),
            "explicit" => match text_as_bool(element) {
                Some(explicit) => builder.with_itunes(|b| b.explicit(explicit)),
                None => {
                    log_dropped(element, "explicit is not a boolean");
                    builder
                }
            },
            "type" => match text_or_none(element).as_deref().and_then(ShowType::from_str_opt) {
                Some(show_type) => builder.with_itunes(|b| b.show_type(Some(show_type))),
                None => {
                    log_dropped(element, "unknown show type");
                    builder
                }
            },
            "category" => {
                let category = to_itunes_category_builder(element);
                if !category.has_enough_data_to_build() {
                    log_dropped(element, "category without text attribute");
                    return builder;
                }
                builder.with_itunes(|b| b.add_category_builder(category))
            }
            "image" => {
                let image = to_href_only_image_builder(element);
                if !image.has_enough_data_to_build() {
                    log_dropped(element, "image without href");
                    return builder;
                }
                builder.with_itunes(|b| b.image_builder(image))
            }
            "owner" => {
                let owner = to_person_builder(element, element.namespace());
                if !owner.has_enough_data_to_build() {
                    log_dropped(element, "owner without name");
                    return builder;
                }
                builder.with_itunes(|b| b.owner_builder(owner))
            }
            _ => builder,
        }
    }

    fn parse_item(&self, element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
        match element.local_name() {
            "author" => builder.with_itunes(|b| b.author(text_or_none(element))),
            "subtitle" => builder.with_itunes(|b| b.subtitle(text_or_none(element))),
            "summary" => builder.with_itunes(|b| b.summary(text_or_none(element))),
            "keywords" => builder.with_itunes(|b| b.keywords(text_or_none(element))),
            "title" => builder.with_itunes(|b| b.title(text_or_none(element))),
            "block" => builder.with_itunes(|b| b.block(is_yes(element))),
            "explicit" => match text_as_bool(element) {
                Some(explicit) => builder.with_itunes(|b| b.explicit(Some(explicit))),
                None => {
                    log_dropped(element, "explicit is not a boolean");
                    builder
                }
            },
            "season" => match text_as_int(element) {
                Some(season) => builder.with_itunes(|b| b.season(Some(season))),
                None => {
                    log_dropped(element, "season is not an integer");
                    builder
                }
            },
            "episode" => match text_as_int(element) {
                Some(episode) => builder.with_itunes(|b| b.episode(Some(episode))),
                None => {
                    log_dropped(element, "episode is not an integer");
                    builder
                }
            },
            "duration" => match text_as_duration(element) {
                Some(duration) => builder.with_itunes(|b| b.duration(Some(duration))),
                None => {
                    log_dropped(element, "unparseable duration");
                    builder
                }
            },
            "episodeType" => {
                match text_or_none(element).as_deref().and_then(EpisodeType::from_str_opt) {
                    Some(episode_type) => {
                        builder.with_itunes(|b| b.episode_type(Some(episode_type)))
                    }
                    None => {
                        log_dropped(element, "unknown episode type");
                        builder
                    }
                }
            }
            "image" => {
                let image = to_href_only_image_builder(element);
                if !image.has_enough_data_to_build() {
                    log_dropped(element, "image without href");
                    return builder;
                }
                builder.with_itunes(|b| b.image_builder(image))
            }
            _ => builder,
        }
    }
}
