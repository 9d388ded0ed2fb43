// ABOUTME: Builders for the Episode model, its enclosure and guid, and item-level extension blocks.
// ABOUTME: PodcastIndex sub-builders enforce their own field validity so broken elements never surface.

use chrono::{DateTime, TimeDelta, Utc};

use crate::builder::{
    any_ready, build_all, AtomBuilder, Builder, HrefOnlyImageBuilder, RssCategoryBuilder,
};
use crate::models::{
    Chapters, Content, Enclosure, Episode, EpisodeGooglePlay, EpisodeItunes, EpisodePodcastindex,
    EpisodeType, Guid, Soundbite, Transcript, TranscriptType,
};

/// Builder for [`Episode`]. Ready once a title is set and the enclosure
/// builder is ready.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeBuilder {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    author: Option<String>,
    category_builders: Vec<RssCategoryBuilder>,
    comments: Option<String>,
    enclosure_builder: Option<EnclosureBuilder>,
    guid_builder: Option<GuidBuilder>,
    pub_date: Option<DateTime<Utc>>,
    source: Option<String>,
    content: Option<ContentBuilder>,
    itunes: Option<EpisodeItunesBuilder>,
    atom: Option<AtomBuilder>,
    googleplay: Option<EpisodeGooglePlayBuilder>,
    podcastindex: Option<EpisodePodcastindexBuilder>,
}

impl EpisodeBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn add_category_builder(mut self, category: RssCategoryBuilder) -> Self {
        self.category_builders.push(category);
        self
    }

    pub fn comments(mut self, comments: Option<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn enclosure_builder(mut self, enclosure: EnclosureBuilder) -> Self {
        self.enclosure_builder = Some(enclosure);
        self
    }

    pub fn guid_builder(mut self, guid: GuidBuilder) -> Self {
        self.guid_builder = Some(guid);
        self
    }

    pub fn pub_date(mut self, pub_date: Option<DateTime<Utc>>) -> Self {
        self.pub_date = pub_date;
        self
    }

    pub fn source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn with_content(mut self, f: impl FnOnce(ContentBuilder) -> ContentBuilder) -> Self {
        self.content = Some(f(self.content.take().unwrap_or_default()));
        self
    }

    pub fn with_itunes(
        mut self,
        f: impl FnOnce(EpisodeItunesBuilder) -> EpisodeItunesBuilder,
    ) -> Self {
        self.itunes = Some(f(self.itunes.take().unwrap_or_default()));
        self
    }

    pub fn with_atom(mut self, f: impl FnOnce(AtomBuilder) -> AtomBuilder) -> Self {
        self.atom = Some(f(self.atom.take().unwrap_or_default()));
        self
    }

    pub fn with_googleplay(
        mut self,
        f: impl FnOnce(EpisodeGooglePlayBuilder) -> EpisodeGooglePlayBuilder,
    ) -> Self {
        self.googleplay = Some(f(self.googleplay.take().unwrap_or_default()));
        self
    }

    pub fn with_podcastindex(
        mut self,
        f: impl FnOnce(EpisodePodcastindexBuilder) -> EpisodePodcastindexBuilder,
    ) -> Self {
        self.podcastindex = Some(f(self.podcastindex.take().unwrap_or_default()));
        self
    }

    /// The title collected so far, used when logging dropped items.
    pub fn current_title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Builder for EpisodeBuilder {
    type Model = Episode;

    fn has_enough_data_to_build(&self) -> bool {
        self.title.is_some()
            && self
                .enclosure_builder
                .as_ref()
                .is_some_and(Builder::has_enough_data_to_build)
    }

    fn build(self) -> Option<Episode> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(Episode {
            title: self.title?,
            enclosure: self.enclosure_builder?.build()?,
            link: self.link,
            description: self.description,
            author: self.author,
            categories: build_all(self.category_builders),
            comments: self.comments,
            guid: self.guid_builder.and_then(Builder::build),
            pub_date: self.pub_date,
            source: self.source,
            content: self.content.and_then(Builder::build),
            itunes: self.itunes.and_then(Builder::build),
            atom: self.atom.and_then(Builder::build),
            googleplay: self.googleplay.and_then(Builder::build),
            podcastindex: self.podcastindex.and_then(Builder::build),
        })
    }

    fn from_model(mut self, model: &Episode) -> Self {
        self = self
            .title(model.title.clone())
            .enclosure_builder(EnclosureBuilder::default().from_model(&model.enclosure))
            .link(model.link.clone())
            .description(model.description.clone())
            .author(model.author.clone())
            .comments(model.comments.clone())
            .pub_date(model.pub_date)
            .source(model.source.clone());
        for category in &model.categories {
            self = self.add_category_builder(RssCategoryBuilder::default().from_model(category));
        }
        if let Some(guid) = &model.guid {
            self = self.guid_builder(GuidBuilder::default().from_model(guid));
        }
        if let Some(content) = &model.content {
            self = self.with_content(|b| b.from_model(content));
        }
        if let Some(itunes) = &model.itunes {
            self = self.with_itunes(|b| b.from_model(itunes));
        }
        if let Some(atom) = &model.atom {
            self = self.with_atom(|b| b.from_model(atom));
        }
        if let Some(googleplay) = &model.googleplay {
            self = self.with_googleplay(|b| b.from_model(googleplay));
        }
        if let Some(podcastindex) = &model.podcastindex {
            self = self.with_podcastindex(|b| b.from_model(podcastindex));
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnclosureBuilder {
    url: Option<String>,
    length: Option<u64>,
    mime_type: Option<String>,
}

impl EnclosureBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl Builder for EnclosureBuilder {
    type Model = Enclosure;

    fn has_enough_data_to_build(&self) -> bool {
        self.url.is_some() && self.length.is_some() && self.mime_type.is_some()
    }

    fn build(self) -> Option<Enclosure> {
        Some(Enclosure {
            url: self.url?,
            length: self.length?,
            mime_type: self.mime_type?,
        })
    }

    fn from_model(self, model: &Enclosure) -> Self {
        self.url(model.url.clone())
            .length(model.length)
            .mime_type(model.mime_type.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuidBuilder {
    text: Option<String>,
    is_permalink: Option<bool>,
}

impl GuidBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn is_permalink(mut self, is_permalink: Option<bool>) -> Self {
        self.is_permalink = is_permalink;
        self
    }
}

impl Builder for GuidBuilder {
    type Model = Guid;

    fn has_enough_data_to_build(&self) -> bool {
        self.text.is_some()
    }

    fn build(self) -> Option<Guid> {
        Some(Guid {
            text: self.text?,
            is_permalink: self.is_permalink,
        })
    }

    fn from_model(self, model: &Guid) -> Self {
        self.text(model.text.clone()).is_permalink(model.is_permalink)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBuilder {
    encoded: Option<String>,
}

impl ContentBuilder {
    pub fn encoded(mut self, encoded: impl Into<String>) -> Self {
        self.encoded = Some(encoded.into());
        self
    }
}

impl Builder for ContentBuilder {
    type Model = Content;

    fn has_enough_data_to_build(&self) -> bool {
        self.encoded.is_some()
    }

    fn build(self) -> Option<Content> {
        Some(Content {
            encoded: self.encoded?,
        })
    }

    fn from_model(self, model: &Content) -> Self {
        self.encoded(model.encoded.clone())
    }
}

/// Builder for [`EpisodeItunes`]: any single field (or `block = true`) is
/// enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeItunesBuilder {
    title: Option<String>,
    duration: Option<TimeDelta>,
    image_builder: Option<HrefOnlyImageBuilder>,
    explicit: Option<bool>,
    block: bool,
    season: Option<i32>,
    episode: Option<i32>,
    episode_type: Option<EpisodeType>,
    author: Option<String>,
    subtitle: Option<String>,
    summary: Option<String>,
    keywords: Option<String>,
}

impl EpisodeItunesBuilder {
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn duration(mut self, duration: Option<TimeDelta>) -> Self {
        self.duration = duration;
        self
    }

    pub fn image_builder(mut self, image: HrefOnlyImageBuilder) -> Self {
        self.image_builder = Some(image);
        self
    }

    pub fn explicit(mut self, explicit: Option<bool>) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    pub fn season(mut self, season: Option<i32>) -> Self {
        self.season = season;
        self
    }

    pub fn episode(mut self, episode: Option<i32>) -> Self {
        self.episode = episode;
        self
    }

    pub fn episode_type(mut self, episode_type: Option<EpisodeType>) -> Self {
        self.episode_type = episode_type;
        self
    }

    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn keywords(mut self, keywords: Option<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

impl Builder for EpisodeItunesBuilder {
    type Model = EpisodeItunes;

    fn has_enough_data_to_build(&self) -> bool {
        self.title.is_some()
            || self.duration.is_some()
            || self
                .image_builder
                .as_ref()
                .is_some_and(Builder::has_enough_data_to_build)
            || self.explicit.is_some()
            || self.block
            || self.season.is_some()
            || self.episode.is_some()
            || self.episode_type.is_some()
            || self.author.is_some()
            || self.subtitle.is_some()
            || self.summary.is_some()
            || self.keywords.is_some()
    }

    fn build(self) -> Option<EpisodeItunes> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(EpisodeItunes {
            title: self.title,
            duration: self.duration,
            image: self.image_builder.and_then(Builder::build),
            explicit: self.explicit,
            block: self.block,
            season: self.season,
            episode: self.episode,
            episode_type: self.episode_type,
            author: self.author,
            subtitle: self.subtitle,
            summary: self.summary,
            keywords: self.keywords,
        })
    }

    fn from_model(mut self, model: &EpisodeItunes) -> Self {
        self = self
            .title(model.title.clone())
            .duration(model.duration)
            .explicit(model.explicit)
            .block(model.block)
            .season(model.season)
            .episode(model.episode)
            .episode_type(model.episode_type)
            .author(model.author.clone())
            .subtitle(model.subtitle.clone())
            .summary(model.summary.clone())
            .keywords(model.keywords.clone());
        if let Some(image) = &model.image {
            self = self.image_builder(HrefOnlyImageBuilder::default().from_model(image));
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeGooglePlayBuilder {
    description: Option<String>,
    explicit: Option<bool>,
    block: bool,
    image_builder: Option<HrefOnlyImageBuilder>,
}

impl EpisodeGooglePlayBuilder {
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn explicit(mut self, explicit: Option<bool>) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    pub fn image_builder(mut self, image: HrefOnlyImageBuilder) -> Self {
        self.image_builder = Some(image);
        self
    }
}

impl Builder for EpisodeGooglePlayBuilder {
    type Model = EpisodeGooglePlay;

    fn has_enough_data_to_build(&self) -> bool {
        self.description.is_some()
            || self.explicit.is_some()
            || self.block
            || self
                .image_builder
                .as_ref()
                .is_some_and(Builder::has_enough_data_to_build)
    }

    fn build(self) -> Option<EpisodeGooglePlay> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(EpisodeGooglePlay {
            description: self.description,
            explicit: self.explicit,
            block: self.block,
            image: self.image_builder.and_then(Builder::build),
        })
    }

    fn from_model(mut self, model: &EpisodeGooglePlay) -> Self {
        self = self
            .description(model.description.clone())
            .explicit(model.explicit)
            .block(model.block);
        if let Some(image) = &model.image {
            self = self.image_builder(HrefOnlyImageBuilder::default().from_model(image));
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodePodcastindexBuilder {
    chapters_builder: Option<ChaptersBuilder>,
    soundbite_builders: Vec<SoundbiteBuilder>,
    transcript_builders: Vec<TranscriptBuilder>,
}

impl EpisodePodcastindexBuilder {
    /// Replaces any previously set chapters builder.
    pub fn chapters_builder(mut self, chapters: ChaptersBuilder) -> Self {
        self.chapters_builder = Some(chapters);
        self
    }

    pub fn add_soundbite_builder(mut self, soundbite: SoundbiteBuilder) -> Self {
        self.soundbite_builders.push(soundbite);
        self
    }

    pub fn add_transcript_builder(mut self, transcript: TranscriptBuilder) -> Self {
        self.transcript_builders.push(transcript);
        self
    }
}

impl Builder for EpisodePodcastindexBuilder {
    type Model = EpisodePodcastindex;

    fn has_enough_data_to_build(&self) -> bool {
        self.chapters_builder
            .as_ref()
            .is_some_and(Builder::has_enough_data_to_build)
            || any_ready(&self.soundbite_builders)
            || any_ready(&self.transcript_builders)
    }

    fn build(self) -> Option<EpisodePodcastindex> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(EpisodePodcastindex {
            chapters: self.chapters_builder.and_then(Builder::build),
            soundbites: build_all(self.soundbite_builders),
            transcripts: build_all(self.transcript_builders),
        })
    }

    fn from_model(mut self, model: &EpisodePodcastindex) -> Self {
        if let Some(chapters) = &model.chapters {
            self = self.chapters_builder(ChaptersBuilder::default().from_model(chapters));
        }
        for soundbite in &model.soundbites {
            self = self.add_soundbite_builder(SoundbiteBuilder::default().from_model(soundbite));
        }
        for transcript in &model.transcripts {
            self = self.add_transcript_builder(TranscriptBuilder::default().from_model(transcript));
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChaptersBuilder {
    url: Option<String>,
    mime_type: Option<String>,
}

impl ChaptersBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl Builder for ChaptersBuilder {
    type Model = Chapters;

    fn has_enough_data_to_build(&self) -> bool {
        self.url.is_some() && self.mime_type.is_some()
    }

    fn build(self) -> Option<Chapters> {
        Some(Chapters {
            url: self.url?,
            mime_type: self.mime_type?,
        })
    }

    fn from_model(self, model: &Chapters) -> Self {
        self.url(model.url.clone()).mime_type(model.mime_type.clone())
    }
}

/// Builder for [`Soundbite`]. Holds whatever values were supplied and only
/// reports readiness when `start_time >= 0` and `duration > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoundbiteBuilder {
    start_time: Option<TimeDelta>,
    duration: Option<TimeDelta>,
    title: Option<String>,
}

impl SoundbiteBuilder {
    pub fn start_time(mut self, start_time: TimeDelta) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn duration(mut self, duration: TimeDelta) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

impl Builder for SoundbiteBuilder {
    type Model = Soundbite;

    fn has_enough_data_to_build(&self) -> bool {
        let start_ok = self.start_time.is_some_and(|start| start >= TimeDelta::zero());
        let duration_ok = self.duration.is_some_and(|duration| duration > TimeDelta::zero());
        start_ok && duration_ok
    }

    fn build(self) -> Option<Soundbite> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(Soundbite {
            start_time: self.start_time?,
            duration: self.duration?,
            title: self.title,
        })
    }

    fn from_model(self, model: &Soundbite) -> Self {
        self.start_time(model.start_time)
            .duration(model.duration)
            .title(model.title.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptBuilder {
    url: Option<String>,
    transcript_type: Option<TranscriptType>,
    language: Option<String>,
    rel: Option<String>,
}

impl TranscriptBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn transcript_type(mut self, transcript_type: TranscriptType) -> Self {
        self.transcript_type = Some(transcript_type);
        self
    }

    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn rel(mut self, rel: Option<String>) -> Self {
        self.rel = rel;
        self
    }
}

impl Builder for TranscriptBuilder {
    type Model = Transcript;

    fn has_enough_data_to_build(&self) -> bool {
        self.url.is_some() && self.transcript_type.is_some()
    }

    fn build(self) -> Option<Transcript> {
        Some(Transcript {
            url: self.url?,
            transcript_type: self.transcript_type?,
            language: self.language,
            rel: self.rel,
        })
    }

    fn from_model(self, model: &Transcript) -> Self {
        self.url(model.url.clone())
            .transcript_type(model.transcript_type)
            .language(model.language.clone())
            .rel(model.rel.clone())
    }
}
