// ABOUTME: Channel-level models: the Podcast itself and its namespace extension blocks.
// ABOUTME: Covers iTunes, GooglePlay, PodcastIndex (locked, funding), and Feedpress data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::builder::{
    FeedpressBuilder, FundingBuilder, LockedBuilder, PodcastBuilder, PodcastGooglePlayBuilder,
    PodcastItunesBuilder, PodcastPodcastindexBuilder,
};
use crate::models::{
    Atom, Category, Episode, HrefOnlyImage, Image, ItunesCategory, Person, RssCategory, RssImage,
};

/// A fully validated podcast feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub last_build_date: Option<DateTime<Utc>>,
    pub generator: Option<String>,
    pub copyright: Option<String>,
    pub docs: Option<String>,
    pub managing_editor: Option<String>,
    pub web_master: Option<String>,
    pub ttl: Option<i32>,
    pub image: Option<RssImage>,
    pub categories: Vec<RssCategory>,
    /// Never empty.
    pub episodes: Vec<Episode>,
    pub itunes: Option<PodcastItunes>,
    pub atom: Option<Atom>,
    pub googleplay: Option<PodcastGooglePlay>,
    pub podcastindex: Option<PodcastPodcastindex>,
    pub feedpress: Option<Feedpress>,
}

impl Podcast {
    pub fn builder() -> PodcastBuilder {
        PodcastBuilder::default()
    }

    /// Every image depicting the podcast: RSS, then iTunes, then GooglePlay.
    pub fn images(&self) -> Vec<Image> {
        let mut images = Vec::new();
        if let Some(image) = &self.image {
            images.push(Image::from(image.clone()));
        }
        if let Some(itunes) = &self.itunes {
            images.push(Image::from(itunes.image.clone()));
        }
        if let Some(image) = self.googleplay.as_ref().and_then(|g| g.image.as_ref()) {
            images.push(Image::from(image.clone()));
        }
        images
    }

    /// Every category of the podcast: RSS, then iTunes, then GooglePlay,
    /// each in document order.
    pub fn all_categories(&self) -> Vec<Category> {
        let rss = self.categories.iter().cloned().map(Category::from);
        let itunes = self
            .itunes
            .iter()
            .flat_map(|itunes| itunes.categories.iter().cloned())
            .map(Category::from);
        let googleplay = self
            .googleplay
            .iter()
            .flat_map(|googleplay| googleplay.categories.iter().cloned())
            .map(Category::from);
        rss.chain(itunes).chain(googleplay).collect()
    }
}

/// `itunes:type` of a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowType {
    Episodic,
    Serial,
}

impl ShowType {
    /// Case-insensitive lookup; unknown names yield `None`.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "episodic" => Some(ShowType::Episodic),
            "serial" => Some(ShowType::Serial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShowType::Episodic => "episodic",
            ShowType::Serial => "serial",
        }
    }
}

/// Channel-level iTunes data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastItunes {
    pub image: HrefOnlyImage,
    /// At least one.
    pub categories: Vec<ItunesCategory>,
    pub explicit: bool,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub owner: Option<Person>,
    pub title: Option<String>,
    pub show_type: Option<ShowType>,
    pub new_feed_url: Option<String>,
    pub block: bool,
    pub complete: bool,
}

impl PodcastItunes {
    pub fn builder() -> PodcastItunesBuilder {
        PodcastItunesBuilder::default()
    }
}

/// Channel-level Google Play data. Every field is optional, but at least one
/// is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastGooglePlay {
    pub author: Option<String>,
    /// Owner e-mail address.
    pub owner: Option<String>,
    pub categories: Vec<ItunesCategory>,
    pub description: Option<String>,
    pub explicit: Option<bool>,
    pub block: bool,
    pub image: Option<HrefOnlyImage>,
    pub new_feed_url: Option<String>,
}

impl PodcastGooglePlay {
    pub fn builder() -> PodcastGooglePlayBuilder {
        PodcastGooglePlayBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastPodcastindex {
    pub locked: Option<Locked>,
    pub funding: Vec<Funding>,
}

impl PodcastPodcastindex {
    pub fn builder() -> PodcastPodcastindexBuilder {
        PodcastPodcastindexBuilder::default()
    }
}

/// `podcast:locked`: whether other platforms may import the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locked {
    pub owner: String,
    pub locked: bool,
}

impl Locked {
    pub fn builder() -> LockedBuilder {
        LockedBuilder::default()
    }
}

/// `podcast:funding`: a donation or support link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Funding {
    pub url: String,
    pub message: String,
}

impl Funding {
    pub fn builder() -> FundingBuilder {
        FundingBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedpress {
    pub newsletter_id: Option<String>,
    pub locale: Option<String>,
    pub podcast_id: Option<String>,
    pub css_file: Option<String>,
    pub link: Option<String>,
}

impl Feedpress {
    pub fn builder() -> FeedpressBuilder {
        FeedpressBuilder::default()
    }
}
