// ABOUTME: Parser for the PodcastIndex namespace: locked and funding on channels, chapters,
// ABOUTME: soundbites and transcripts on items. An element missing a required field is dropped whole.

use crate::builder::{
    Builder, ChaptersBuilder, EpisodeBuilder, FundingBuilder, LockedBuilder, PodcastBuilder,
    SoundbiteBuilder, TranscriptBuilder,
};
use crate::dom::Element;
use crate::duration_parse::parse_signed_seconds;
use crate::extract::{attribute_value, text_as_bool, text_or_none};
use crate::models::TranscriptType;
use crate::namespace::FeedNamespace;
use crate::parser::{log_dropped, NamespaceParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct PodcastindexParser;

impl NamespaceParser for PodcastindexParser {
    fn namespace(&self) -> FeedNamespace {
        FeedNamespace::Podcastindex
    }

    fn parse_channel(&self, element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
        match element.local_name() {
            "locked" => match to_locked_builder(element) {
                Some(locked) => builder.with_podcastindex(|b| b.locked_builder(locked)),
                None => {
                    log_dropped(element, "locked needs owner and a boolean value");
                    builder
                }
            },
            "funding" => match to_funding_builder(element) {
                Some(funding) => builder.with_podcastindex(|b| b.add_funding_builder(funding)),
                None => {
                    log_dropped(element, "funding needs url and message");
                    builder
                }
            },
            _ => builder,
        }
    }

    fn parse_item(&self, element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
        match element.local_name() {
            "chapters" => match to_chapters_builder(element) {
                Some(chapters) => builder.with_podcastindex(|b| b.chapters_builder(chapters)),
                None => {
                    log_dropped(element, "chapters needs url and type");
                    builder
                }
            },
            "soundbite" => match to_soundbite_builder(element) {
                Some(soundbite) => {
                    builder.with_podcastindex(|b| b.add_soundbite_builder(soundbite))
                }
                None => {
                    log_dropped(element, "soundbite needs startTime >= 0 and duration > 0");
                    builder
                }
            },
            "transcript" => match to_transcript_builder(element) {
                Some(transcript) => {
                    builder.with_podcastindex(|b| b.add_transcript_builder(transcript))
                }
                None => {
                    log_dropped(element, "transcript needs url and a known type");
                    builder
                }
            },
            _ => builder,
        }
    }
}

fn to_locked_builder(element: &Element) -> Option<LockedBuilder> {
    let owner = attribute_value(element, "owner")?;
    let locked = text_as_bool(element)?;
    Some(LockedBuilder::default().owner(owner).locked(locked))
}

fn to_funding_builder(element: &Element) -> Option<FundingBuilder> {
    let url = attribute_value(element, "url")?;
    let message = text_or_none(element)?;
    Some(FundingBuilder::default().url(url).message(message))
}

fn to_chapters_builder(element: &Element) -> Option<ChaptersBuilder> {
    let url = attribute_value(element, "url")?;
    let mime_type = attribute_value(element, "type")?;
    Some(ChaptersBuilder::default().url(url).mime_type(mime_type))
}

fn to_soundbite_builder(element: &Element) -> Option<SoundbiteBuilder> {
    let start_time = parse_signed_seconds(&attribute_value(element, "startTime")?)?;
    let duration = parse_signed_seconds(&attribute_value(element, "duration")?)?;
    let soundbite = SoundbiteBuilder::default()
        .start_time(start_time)
        .duration(duration)
        .title(text_or_none(element));
    soundbite.has_enough_data_to_build().then_some(soundbite)
}

fn to_transcript_builder(element: &Element) -> Option<TranscriptBuilder> {
    let url = attribute_value(element, "url")?;
    let transcript_type = attribute_value(element, "type")
        .as_deref()
        .and_then(TranscriptType::from_mime)?;
    Some(
        TranscriptBuilder::default()
            .url(url)
            .transcript_type(transcript_type)
            .language(attribute_value(element, "language"))
            .rel(attribute_value(element, "rel")),
    )
}
