// ABOUTME: Item-level models: the Episode and its enclosure, guid, and namespace extension blocks.
// ABOUTME: Covers Content, iTunes, GooglePlay, and PodcastIndex (chapters, soundbites, transcripts).

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::builder::{
    ChaptersBuilder, ContentBuilder, EnclosureBuilder, EpisodeBuilder, EpisodeGooglePlayBuilder,
    EpisodeItunesBuilder, EpisodePodcastindexBuilder, GuidBuilder, SoundbiteBuilder,
    TranscriptBuilder,
};
use crate::duration_parse::serde_seconds;
use crate::models::{Atom, HrefOnlyImage, RssCategory};

/// A fully validated episode (RSS `<item>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub enclosure: Enclosure,
    pub link: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<RssCategory>,
    pub comments: Option<String>,
    pub guid: Option<Guid>,
    pub pub_date: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub content: Option<Content>,
    pub itunes: Option<EpisodeItunes>,
    pub atom: Option<Atom>,
    pub googleplay: Option<EpisodeGooglePlay>,
    pub podcastindex: Option<EpisodePodcastindex>,
}

impl Episode {
    pub fn builder() -> EpisodeBuilder {
        EpisodeBuilder::default()
    }
}

/// The media file attached to an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    /// Size in bytes.
    pub length: u64,
    pub mime_type: String,
}

impl Enclosure {
    pub fn builder() -> EnclosureBuilder {
        EnclosureBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guid {
    pub text: String,
    pub is_permalink: Option<bool>,
}

impl Guid {
    pub fn builder() -> GuidBuilder {
        GuidBuilder::default()
    }
}

/// `content:encoded`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub encoded: String,
}

impl Content {
    pub fn builder() -> ContentBuilder {
        ContentBuilder::default()
    }
}

/// `itunes:episodeType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeType {
    Full,
    Trailer,
    Bonus,
}

impl EpisodeType {
    /// Case-insensitive lookup; unknown names yield `None`.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Some(EpisodeType::Full),
            "trailer" => Some(EpisodeType::Trailer),
            "bonus" => Some(EpisodeType::Bonus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EpisodeType::Full => "full",
            EpisodeType::Trailer => "trailer",
            EpisodeType::Bonus => "bonus",
        }
    }
}

/// Item-level iTunes data. All fields are optional; the block exists when
/// at least one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeItunes {
    pub title: Option<String>,
    #[serde(with = "serde_seconds::option")]
    pub duration: Option<TimeDelta>,
    pub image: Option<HrefOnlyImage>,
    pub explicit: Option<bool>,
    pub block: bool,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    pub episode_type: Option<EpisodeType>,
    pub author: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    pub keywords: Option<String>,
}

impl EpisodeItunes {
    pub fn builder() -> EpisodeItunesBuilder {
        EpisodeItunesBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeGooglePlay {
    pub description: Option<String>,
    pub explicit: Option<bool>,
    pub block: bool,
    pub image: Option<HrefOnlyImage>,
}

impl EpisodeGooglePlay {
    pub fn builder() -> EpisodeGooglePlayBuilder {
        EpisodeGooglePlayBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodePodcastindex {
    pub chapters: Option<Chapters>,
    pub soundbites: Vec<Soundbite>,
    pub transcripts: Vec<Transcript>,
}

impl EpisodePodcastindex {
    pub fn builder() -> EpisodePodcastindexBuilder {
        EpisodePodcastindexBuilder::default()
    }
}

/// `podcast:chapters`: a link to an external chapters file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapters {
    pub url: String,
    pub mime_type: String,
}

impl Chapters {
    pub fn builder() -> ChaptersBuilder {
        ChaptersBuilder::default()
    }
}

/// `podcast:soundbite`: a highlight of the episode.
///
/// `start_time` is never negative and `duration` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soundbite {
    #[serde(with = "serde_seconds")]
    pub start_time: TimeDelta,
    #[serde(with = "serde_seconds")]
    pub duration: TimeDelta,
    pub title: Option<String>,
}

impl Soundbite {
    pub fn builder() -> SoundbiteBuilder {
        SoundbiteBuilder::default()
    }
}

/// Transcript formats recognized in `podcast:transcript`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptType {
    #[serde(rename = "text/plain")]
    PlainText,
    #[serde(rename = "text/html")]
    Html,
    #[serde(rename = "application/srt")]
    Srt,
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "text/vtt")]
    Vtt,
}

impl TranscriptType {
    /// Looks a MIME type up, ignoring case and MIME parameters
    /// (`text/html; charset=utf-8`).
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "text/plain" => Some(TranscriptType::PlainText),
            "text/html" => Some(TranscriptType::Html),
            "application/srt" | "application/x-subrip" => Some(TranscriptType::Srt),
            "application/json" => Some(TranscriptType::Json),
            "text/vtt" => Some(TranscriptType::Vtt),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            TranscriptType::PlainText => "text/plain",
            TranscriptType::Html => "text/html",
            TranscriptType::Srt => "application/srt",
            TranscriptType::Json => "application/json",
            TranscriptType::Vtt => "text/vtt",
        }
    }
}

/// `podcast:transcript`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub url: String,
    pub transcript_type: TranscriptType,
    pub language: Option<String>,
    pub rel: Option<String>,
}

impl Transcript {
    pub fn builder() -> TranscriptBuilder {
        TranscriptBuilder::default()
    }
}
