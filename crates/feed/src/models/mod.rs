// ABOUTME: Immutable podcast feed models produced by the validating builders.
// ABOUTME: Groups shared value types, podcast-level and episode-level entities.

mod common;
mod episode;
mod podcast;

pub use common::{
    Atom, Category, HrefOnlyImage, Image, ItunesCategory, Link, Person, RssCategory, RssImage,
};
pub use episode::{
    Chapters, Content, Enclosure, Episode, EpisodeGooglePlay, EpisodeItunes, EpisodePodcastindex,
    EpisodeType, Guid, Soundbite, Transcript, TranscriptType,
};
pub use podcast::{
    Feedpress, Funding, Locked, Podcast, PodcastGooglePlay, PodcastItunes, PodcastPodcastindex,
    ShowType,
};
