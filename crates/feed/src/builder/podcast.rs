// ABOUTME: Builders for the Podcast model and its channel-level namespace extension blocks.
// ABOUTME: Extension sub-builders are created lazily and only kept when they build successfully.

use chrono::{DateTime, Utc};

use crate::builder::{
    any_ready, build_all, AtomBuilder, Builder, EpisodeBuilder, HrefOnlyImageBuilder,
    ItunesCategoryBuilder, PersonBuilder, RssCategoryBuilder, RssImageBuilder,
};
use crate::models::{
    Feedpress, Funding, Locked, Podcast, PodcastGooglePlay, PodcastItunes, PodcastPodcastindex,
    ShowType,
};

/// Builder for [`Podcast`].
///
/// Ready once `title`, `link`, `description` and `language` are set and at
/// least one episode builder is ready. Episodes that cannot be built are
/// dropped from the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodcastBuilder {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    language: Option<String>,
    pub_date: Option<DateTime<Utc>>,
    last_build_date: Option<DateTime<Utc>>,
    generator: Option<String>,
    copyright: Option<String>,
    docs: Option<String>,
    managing_editor: Option<String>,
    web_master: Option<String>,
    ttl: Option<i32>,
    image_builder: Option<RssImageBuilder>,
    category_builders: Vec<RssCategoryBuilder>,
    episode_builders: Vec<EpisodeBuilder>,
    itunes: Option<PodcastItunesBuilder>,
    atom: Option<AtomBuilder>,
    googleplay: Option<PodcastGooglePlayBuilder>,
    podcastindex: Option<PodcastPodcastindexBuilder>,
    feedpress: Option<FeedpressBuilder>,
}

impl PodcastBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn pub_date(mut self, pub_date: Option<DateTime<Utc>>) -> Self {
        self.pub_date = pub_date;
        self
    }

    pub fn last_build_date(mut self, last_build_date: Option<DateTime<Utc>>) -> Self {
        self.last_build_date = last_build_date;
        self
    }

    pub fn generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    pub fn copyright(mut self, copyright: Option<String>) -> Self {
        self.copyright = copyright;
        self
    }

    pub fn docs(mut self, docs: Option<String>) -> Self {
        self.docs = docs;
        self
    }

    pub fn managing_editor(mut self, managing_editor: Option<String>) -> Self {
        self.managing_editor = managing_editor;
        self
    }

    pub fn web_master(mut self, web_master: Option<String>) -> Self {
        self.web_master = web_master;
        self
    }

    pub fn ttl(mut self, ttl: Option<i32>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn image_builder(mut self, image: RssImageBuilder) -> Self {
        self.image_builder = Some(image);
        self
    }

    pub fn add_category_builder(mut self, category: RssCategoryBuilder) -> Self {
        self.category_builders.push(category);
        self
    }

    pub fn add_episode_builder(mut self, episode: EpisodeBuilder) -> Self {
        self.episode_builders.push(episode);
        self
    }

    pub fn episode_builders(&self) -> &[EpisodeBuilder] {
        &self.episode_builders
    }

    /// Applies `f` to the iTunes sub-builder, creating it on first use.
    pub fn with_itunes(
        mut self,
        f: impl FnOnce(PodcastItunesBuilder) -> PodcastItunesBuilder,
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
        f: impl FnOnce(PodcastGooglePlayBuilder) -> PodcastGooglePlayBuilder,
    ) -> Self {
        self.googleplay = Some(f(self.googleplay.take().unwrap_or_default()));
        self
    }

    pub fn with_podcastindex(
        mut self,
        f: impl FnOnce(PodcastPodcastindexBuilder) -> PodcastPodcastindexBuilder,
    ) -> Self {
        self.podcastindex = Some(f(self.podcastindex.take().unwrap_or_default()));
        self
    }

    pub fn with_feedpress(mut self, f: impl FnOnce(FeedpressBuilder) -> FeedpressBuilder) -> Self {
        self.feedpress = Some(f(self.feedpress.take().unwrap_or_default()));
        self
    }
}

impl Builder for PodcastBuilder {
    type Model = Podcast;

    fn has_enough_data_to_build(&self) -> bool {
        self.title.is_some()
            && self.link.is_some()
            && self.description.is_some()
            && self.language.is_some()
            && any_ready(&self.episode_builders)
    }

    fn build(self) -> Option<Podcast> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(Podcast {
            title: self.title?,
            link: self.link?,
            description: self.description?,
            language: self.language?,
            pub_date: self.pub_date,
            last_build_date: self.last_build_date,
            generator: self.generator,
            copyright: self.copyright,
            docs: self.docs,
            managing_editor: self.managing_editor,
            web_master: self.web_master,
            ttl: self.ttl,
            image: self.image_builder.and_then(Builder::build),
            categories: build_all(self.category_builders),
            episodes: build_all(self.episode_builders),
            itunes: self.itunes.and_then(Builder::build),
            atom: self.atom.and_then(Builder::build),
            googleplay: self.googleplay.and_then(Builder::build),
            podcastindex: self.podcastindex.and_then(Builder::build),
            feedpress: self.feedpress.and_then(Builder::build),
        })
    }

    fn from_model(mut self, model: &Podcast) -> Self {
        self = self
            .title(model.title.clone())
            .link(model.link.clone())
            .description(model.description.clone())
            .language(model.language.clone())
            .pub_date(model.pub_date)
            .last_build_date(model.last_build_date)
            .generator(model.generator.clone())
            .copyright(model.copyright.clone())
            .docs(model.docs.clone())
            .managing_editor(model.managing_editor.clone())
            .web_master(model.web_master.clone())
            .ttl(model.ttl);
        if let Some(image) = &model.image {
            self = self.image_builder(RssImageBuilder::default().from_model(image));
        }
        for category in &model.categories {
            self = self.add_category_builder(RssCategoryBuilder::default().from_model(category));
        }
        for episode in &model.episodes {
            self = self.add_episode_builder(EpisodeBuilder::default().from_model(episode));
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
        if let Some(feedpress) = &model.feedpress {
            self = self.with_feedpress(|b| b.from_model(feedpress));
        }
        self
    }
}

/// Builder for [`PodcastItunes`]: needs an image, at least one category and
/// the explicit flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodcastItunesBuilder {
    image_builder: Option<HrefOnlyImageBuilder>,
    category_builders: Vec<ItunesCategoryBuilder>,
    explicit: Option<bool>,
    subtitle: Option<String>,
    summary: Option<String>,
    keywords: Option<String>,
    author: Option<String>,
    owner_builder: Option<PersonBuilder>,
    title: Option<String>,
    show_type: Option<ShowType>,
    new_feed_url: Option<String>,
    block: bool,
    complete: bool,
}

impl PodcastItunesBuilder {
    pub fn image_builder(mut self, image: HrefOnlyImageBuilder) -> Self {
        self.image_builder = Some(image);
        self
    }

    pub fn add_category_builder(mut self, category: ItunesCategoryBuilder) -> Self {
        self.category_builders.push(category);
        self
    }

    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = Some(explicit);
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

    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn owner_builder(mut self, owner: PersonBuilder) -> Self {
        self.owner_builder = Some(owner);
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn show_type(mut self, show_type: Option<ShowType>) -> Self {
        self.show_type = show_type;
        self
    }

    pub fn new_feed_url(mut self, new_feed_url: Option<String>) -> Self {
        self.new_feed_url = new_feed_url;
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }
}

impl Builder for PodcastItunesBuilder {
    type Model = PodcastItunes;

    fn has_enough_data_to_build(&self) -> bool {
        self.image_builder
            .as_ref()
            .is_some_and(Builder::has_enough_data_to_build)
            && any_ready(&self.category_builders)
            && self.explicit.is_some()
    }

    fn build(self) -> Option<PodcastItunes> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(PodcastItunes {
            image: self.image_builder?.build()?,
            categories: build_all(self.category_builders),
            explicit: self.explicit?,
            subtitle: self.subtitle,
            summary: self.summary,
            keywords: self.keywords,
            author: self.author,
            owner: self.owner_builder.and_then(Builder::build),
            title: self.title,
            show_type: self.show_type,
            new_feed_url: self.new_feed_url,
            block: self.block,
            complete: self.complete,
        })
    }

    fn from_model(mut self, model: &PodcastItunes) -> Self {
        self = self
            .image_builder(HrefOnlyImageBuilder::default().from_model(&model.image))
            .explicit(model.explicit)
            .subtitle(model.subtitle.clone())
            .summary(model.summary.clone())
            .keywords(model.keywords.clone())
            .author(model.author.clone())
            .title(model.title.clone())
            .show_type(model.show_type)
            .new_feed_url(model.new_feed_url.clone())
            .block(model.block)
            .complete(model.complete);
        for category in &model.categories {
            self = self.add_category_builder(ItunesCategoryBuilder::default().from_model(category));
        }
        if let Some(owner) = &model.owner {
            self = self.owner_builder(PersonBuilder::default().from_model(owner));
        }
        self
    }
}

/// Builder for [`PodcastGooglePlay`]: any single field is enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodcastGooglePlayBuilder {
    author: Option<String>,
    owner: Option<String>,
    category_builders: Vec<ItunesCategoryBuilder>,
    description: Option<String>,
    explicit: Option<bool>,
    block: bool,
    image_builder: Option<HrefOnlyImageBuilder>,
    new_feed_url: Option<String>,
}

impl PodcastGooglePlayBuilder {
    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn owner(mut self, email: Option<String>) -> Self {
        self.owner = email;
        self
    }

    pub fn add_category_builder(mut self, category: ItunesCategoryBuilder) -> Self {
        self.category_builders.push(category);
        self
    }

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

    pub fn new_feed_url(mut self, new_feed_url: Option<String>) -> Self {
        self.new_feed_url = new_feed_url;
        self
    }
}

impl Builder for PodcastGooglePlayBuilder {
    type Model = PodcastGooglePlay;

    fn has_enough_data_to_build(&self) -> bool {
        self.author.is_some()
            || self.owner.is_some()
            || any_ready(&self.category_builders)
            || self.description.is_some()
            || self.explicit.is_some()
            || self.block
            || self
                .image_builder
                .as_ref()
                .is_some_and(Builder::has_enough_data_to_build)
            || self.new_feed_url.is_some()
    }

    fn build(self) -> Option<PodcastGooglePlay> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(PodcastGooglePlay {
            author: self.author,
            owner: self.owner,
            categories: build_all(self.category_builders),
            description: self.description,
            explicit: self.explicit,
            block: self.block,
            image: self.image_builder.and_then(Builder::build),
            new_feed_url: self.new_feed_url,
        })
    }

    fn from_model(mut self, model: &PodcastGooglePlay) -> Self {
        self = self
            .author(model.author.clone())
            .owner(model.owner.clone())
            .description(model.description.clone())
            .explicit(model.explicit)
            .block(model.block)
            .new_feed_url(model.new_feed_url.clone());
        for category in &model.categories {
            self = self.add_category_builder(ItunesCategoryBuilder::default().from_model(category));
        }
        if let Some(image) = &model.image {
            self = self.image_builder(HrefOnlyImageBuilder::default().from_model(image));
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodcastPodcastindexBuilder {
    locked_builder: Option<LockedBuilder>,
    funding_builders: Vec<FundingBuilder>,
}

impl PodcastPodcastindexBuilder {
    /// Replaces any previously set locked builder.
    pub fn locked_builder(mut self, locked: LockedBuilder) -> Self {
        self.locked_builder = Some(locked);
        self
    }

    pub fn add_funding_builder(mut self, funding: FundingBuilder) -> Self {
        self.funding_builders.push(funding);
        self
    }
}

impl Builder for PodcastPodcastindexBuilder {
    type Model = PodcastPodcastindex;

    fn has_enough_data_to_build(&self) -> bool {
        self.locked_builder
            .as_ref()
            .is_some_and(Builder::has_enough_data_to_build)
            || any_ready(&self.funding_builders)
    }

    fn build(self) -> Option<PodcastPodcastindex> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(PodcastPodcastindex {
            locked: self.locked_builder.and_then(Builder::build),
            funding: build_all(self.funding_builders),
        })
    }

    fn from_model(mut self, model: &PodcastPodcastindex) -> Self {
        if let Some(locked) = &model.locked {
            self = self.locked_builder(LockedBuilder::default().from_model(locked));
        }
        for funding in &model.funding {
            self = self.add_funding_builder(FundingBuilder::default().from_model(funding));
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockedBuilder {
    owner: Option<String>,
    locked: Option<bool>,
}

impl LockedBuilder {
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }
}

impl Builder for LockedBuilder {
    type Model = Locked;

    fn has_enough_data_to_build(&self) -> bool {
        self.owner.is_some() && self.locked.is_some()
    }

    fn build(self) -> Option<Locked> {
        Some(Locked {
            owner: self.owner?,
            locked: self.locked?,
        })
    }

    fn from_model(self, model: &Locked) -> Self {
        self.owner(model.owner.clone()).locked(model.locked)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundingBuilder {
    url: Option<String>,
    message: Option<String>,
}

impl FundingBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Builder for FundingBuilder {
    type Model = Funding;

    fn has_enough_data_to_build(&self) -> bool {
        self.url.is_some() && self.message.is_some()
    }

    fn build(self) -> Option<Funding> {
        Some(Funding {
            url: self.url?,
            message: self.message?,
        })
    }

    fn from_model(self, model: &Funding) -> Self {
        self.url(model.url.clone()).message(model.message.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedpressBuilder {
    newsletter_id: Option<String>,
    locale: Option<String>,
    podcast_id: Option<String>,
    css_file: Option<String>,
    link: Option<String>,
}

impl FeedpressBuilder {
    pub fn newsletter_id(mut self, newsletter_id: Option<String>) -> Self {
        self.newsletter_id = newsletter_id;
        self
    }

    pub fn locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn podcast_id(mut self, podcast_id: Option<String>) -> Self {
        self.podcast_id = podcast_id;
        self
    }

    pub fn css_file(mut self, css_file: Option<String>) -> Self {
        self.css_file = css_file;
        self
    }

    pub fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }
}

impl Builder for FeedpressBuilder {
    type Model = Feedpress;

    fn has_enough_data_to_build(&self) -> bool {
        self.newsletter_id.is_some()
            || self.locale.is_some()
            || self.podcast_id.is_some()
            || self.css_file.is_some()
            || self.link.is_some()
    }

    fn build(self) -> Option<Feedpress> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(Feedpress {
            newsletter_id: self.newsletter_id,
            locale: self.locale,
            podcast_id: self.podcast_id,
            css_file: self.css_file,
            link: self.link,
        })
    }

    fn from_model(self, model: &Feedpress) -> Self {
        self.newsletter_id(model.newsletter_id.clone())
            .locale(model.locale.clone())
            .podcast_id(model.podcast_id.clone())
            .css_file(model.css_file.clone())
            .link(model.link.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EnclosureBuilder;
    use crate::models::HrefOnlyImage;
    use pretty_assertions::assert_eq;

    fn ready_episode() -> EpisodeBuilder {
        EpisodeBuilder::default().title("Episode 1").enclosure_builder(
            EnclosureBuilder::default()
                .url("https://example.com/ep1.mp3")
                .length(1024)
                .mime_type("audio/mpeg"),
        )
    }

    fn ready_podcast() -> PodcastBuilder {
        PodcastBuilder::default()
            .title("Show")
            .link("https://example.com")
            .description("A show")
            .language("en")
            .add_episode_builder(ready_episode())
    }

    #[test]
    fn test_podcast_readiness_requires_core_fields_and_an_episode() {
        let builder = PodcastBuilder::default()
            .title("Show")
            .link("https://example.com")
            .description("A show");
        assert!(!builder.has_enough_data_to_build());

        let builder = builder.language("en");
        assert!(!builder.has_enough_data_to_build());

        let builder = builder.add_episode_builder(EpisodeBuilder::default().title("No enclosure"));
        assert!(!builder.has_enough_data_to_build());

        let builder = builder.add_episode_builder(ready_episode());
        assert!(builder.has_enough_data_to_build());

        let podcast = builder.build().unwrap();
        assert_eq!(podcast.episodes.len(), 1);
        assert_eq!(podcast.episodes[0].title, "Episode 1");
    }

    #[test]
    fn test_readiness_survives_optional_changes() {
        let builder = ready_podcast();
        assert!(builder.has_enough_data_to_build());
        let builder = builder
            .generator(Some("generator".into()))
            .generator(None)
            .ttl(Some(60))
            .with_feedpress(|b| b.locale(Some("en".into())));
        assert!(builder.has_enough_data_to_build());
    }

    #[test]
    fn test_unbuildable_extension_is_omitted() {
        let podcast = ready_podcast()
            .with_itunes(|b| b.author(Some("Host".into())))
            .with_podcastindex(|b| {
                b.locked_builder(LockedBuilder::default().owner("owner@example.com"))
            })
            .build()
            .unwrap();
        assert_eq!(podcast.itunes, None);
        assert_eq!(podcast.podcastindex, None);
    }

    #[test]
    fn test_itunes_needs_image_category_and_explicit() {
        let builder = PodcastItunesBuilder::default()
            .image_builder(HrefOnlyImageBuilder::default().href("https://example.com/cover.jpg"))
            .explicit(false);
        assert!(!builder.has_enough_data_to_build());

        let itunes = builder
            .add_category_builder(ItunesCategoryBuilder::default().name("Technology"))
            .build()
            .unwrap();
        assert_eq!(
            itunes.image,
            HrefOnlyImage {
                href: "https://example.com/cover.jpg".to_string()
            }
        );
        assert!(!itunes.explicit);
        assert_eq!(itunes.categories.len(), 1);
    }

    #[test]
    fn test_googleplay_is_absent_without_any_field() {
        let builder = PodcastGooglePlayBuilder::default();
        assert!(!builder.has_enough_data_to_build());
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn test_googleplay_builds_from_any_single_field() {
        let candidates = vec![
            PodcastGooglePlayBuilder::default().author(Some("author".into())),
            PodcastGooglePlayBuilder::default().owner(Some("owner".into())),
            PodcastGooglePlayBuilder::default()
                .add_category_builder(ItunesCategoryBuilder::default().name("News")),
            PodcastGooglePlayBuilder::default().description(Some("description".into())),
            PodcastGooglePlayBuilder::default().explicit(Some(true)),
            PodcastGooglePlayBuilder::default().block(true),
            PodcastGooglePlayBuilder::default()
                .image_builder(HrefOnlyImageBuilder::default().href("image href")),
            PodcastGooglePlayBuilder::default()
                .new_feed_url(Some("https://new.example.com/rss/rss.xml".into())),
        ];
        for builder in candidates {
            assert!(builder.has_enough_data_to_build(), "{:?}", builder);
            assert!(builder.build().is_some());
        }
    }

    #[test]
    fn test_googleplay_only_author_leaves_rest_empty() {
        let googleplay = PodcastGooglePlayBuilder::default()
            .author(Some("author".into()))
            .build()
            .unwrap();
        assert_eq!(
            googleplay,
            PodcastGooglePlay {
                author: Some("author".to_string()),
                owner: None,
                categories: vec![],
                description: None,
                explicit: None,
                block: false,
                image: None,
                new_feed_url: None,
            }
        );
    }

    #[test]
    fn test_locked_needs_owner_and_flag() {
        assert!(!LockedBuilder::default().owner("me").has_enough_data_to_build());
        assert!(!LockedBuilder::default().locked(true).has_enough_data_to_build());
        assert_eq!(
            LockedBuilder::default().owner("me").locked(true).build(),
            Some(Locked {
                owner: "me".to_string(),
                locked: true
            })
        );
    }

    #[test]
    fn test_funding_keeps_order() {
        let podcastindex = PodcastPodcastindexBuilder::default()
            .add_funding_builder(FundingBuilder::default().url("https://a.example").message("A"))
            .add_funding_builder(FundingBuilder::default().url("https://broken.example"))
            .add_funding_builder(FundingBuilder::default().url("https://b.example").message("B"))
            .build()
            .unwrap();
        let messages: Vec<&str> = podcastindex.funding.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["A", "B"]);
    }

    #[test]
    fn test_feedpress_any_field() {
        assert_eq!(FeedpressBuilder::default().build(), None);
        let feedpress = FeedpressBuilder::default()
            .css_file(Some("style.css".into()))
            .build()
            .unwrap();
        assert_eq!(feedpress.css_file.as_deref(), Some("style.css"));
    }
}
