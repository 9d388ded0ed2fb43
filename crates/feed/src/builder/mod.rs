// ABOUTME: Validating builders that accumulate parsed fields and decide whether a model can exist.
// ABOUTME: Defines the Builder trait shared by every entity builder plus collection helpers.

mod common;
mod episode;
mod podcast;

pub use common::{
    AtomBuilder, HrefOnlyImageBuilder, ItunesCategoryBuilder, LinkBuilder, PersonBuilder,
    RssCategoryBuilder, RssImageBuilder,
};
pub use episode::{
    ChaptersBuilder, ContentBuilder, EnclosureBuilder, EpisodeBuilder, EpisodeGooglePlayBuilder,
    EpisodeItunesBuilder, EpisodePodcastindexBuilder, GuidBuilder, SoundbiteBuilder,
    TranscriptBuilder,
};
pub use podcast::{
    FeedpressBuilder, FundingBuilder, LockedBuilder, PodcastBuilder, PodcastGooglePlayBuilder,
    PodcastItunesBuilder, PodcastPodcastindexBuilder,
};

/// Accumulates the fields of one model entity.
///
/// Setters consume and return the builder. `build` is terminal: it yields
/// the model when [`Builder::has_enough_data_to_build`] holds and `None`
/// otherwise, never a partially populated model.
pub trait Builder: Default + Sized {
    type Model;

    /// Whether the required fields are all present and valid.
    fn has_enough_data_to_build(&self) -> bool;

    fn build(self) -> Option<Self::Model>;

    /// Replays every field of `model` through the regular setters, so that
    /// `B::default().from_model(&m).build() == Some(m)`.
    fn from_model(self, model: &Self::Model) -> Self;
}

/// Builds every builder in order, keeping only the ones that succeed.
pub(crate) fn build_all<B: Builder>(builders: Vec<B>) -> Vec<B::Model> {
    builders.into_iter().filter_map(B::build).collect()
}

pub(crate) fn any_ready<B: Builder>(builders: &[B]) -> bool {
    builders.iter().any(B::has_enough_data_to_build)
}
