// ABOUTME: Known XML namespaces of podcast feeds with their canonical and alias URIs.
// ABOUTME: Resolves an element's namespace URI to a FeedNamespace tag.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeedNamespace {
    Atom,
    Content,
    Itunes,
    GooglePlay,
    Podcastindex,
    Feedpress,
}

impl FeedNamespace {
    pub const ALL: [FeedNamespace; 6] = [
        FeedNamespace::Atom,
        FeedNamespace::Content,
        FeedNamespace::Itunes,
        FeedNamespace::GooglePlay,
        FeedNamespace::Podcastindex,
        FeedNamespace::Feedpress,
    ];

    pub fn uri(&self) -> &'static str {
        match self {
            FeedNamespace::Atom => "http://www.w3.org/2005/Atom",
            FeedNamespace::Content => "http://purl.org/rss/1.0/modules/content/",
            FeedNamespace::Itunes => "http://www.itunes.com/dtds/podcast-1.0.dtd",
            FeedNamespace::GooglePlay => "http://www.google.com/schemas/play-podcasts/1.0",
            FeedNamespace::Podcastindex => "https://podcastindex.org/namespace/1.0",
            FeedNamespace::Feedpress => "https://feed.press/xmlns",
        }
    }

    /// Other URIs found in the wild for the same vocabulary.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            FeedNamespace::Itunes => &["http://www.itunes.com/DTDs/Podcast-1.0.dtd"],
            FeedNamespace::Podcastindex => {
                &["https://github.com/Podcastindex-org/podcast-namespace/blob/main/docs/1.0.md"]
            }
            _ => &[],
        }
    }

    /// Exact match against the canonical URI or an alias.
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ns| ns.uri() == uri || ns.aliases().contains(&uri))
    }
}
