// ABOUTME: Registry mapping feed namespaces to their parsers, plus a fluent builder to configure it.
// ABOUTME: A process-wide standard registry is created lazily and shared by reference.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::namespace::FeedNamespace;
use crate::parser::{
    AtomParser, ContentParser, FeedpressParser, GooglePlayParser, ItunesParser, NamespaceParser,
    PodcastindexParser,
};

static DEFAULT_REGISTRY: Lazy<NamespaceRegistry> = Lazy::new(NamespaceRegistry::standard);

/// The shared registry with every built-in namespace parser enabled.
pub fn default_registry() -> &'static NamespaceRegistry {
    &DEFAULT_REGISTRY
}

fn standard_parser(namespace: FeedNamespace) -> Box<dyn NamespaceParser> {
    match namespace {
        FeedNamespace::Atom => Box::new(AtomParser),
        FeedNamespace::Content => Box::new(ContentParser),
        FeedNamespace::Itunes => Box::new(ItunesParser),
        FeedNamespace::GooglePlay => Box::new(GooglePlayParser),
        FeedNamespace::Podcastindex => Box::new(PodcastindexParser),
        FeedNamespace::Feedpress => Box::new(FeedpressParser),
    }
}

/// Immutable lookup from namespace to parser.
///
/// Elements whose namespace has no registered parser are ignored by the
/// assembler.
#[derive(Default)]
pub struct NamespaceRegistry {
    parsers: BTreeMap<FeedNamespace, Box<dyn NamespaceParser>>,
}

impl NamespaceRegistry {
    /// A registry with every built-in parser.
    pub fn standard() -> Self {
        Self::builder().build()
    }

    /// Starts from the standard set of parsers.
    pub fn builder() -> NamespaceRegistryBuilder {
        NamespaceRegistryBuilder::new()
    }

    pub fn get(&self, namespace: FeedNamespace) -> Option<&dyn NamespaceParser> {
        self.parsers.get(&namespace).map(|parser| parser.as_ref())
    }

    /// Resolves a namespace URI (canonical or alias) to its parser.
    pub fn parser_for_uri(&self, uri: &str) -> Option<&dyn NamespaceParser> {
        self.get(FeedNamespace::from_uri(uri)?)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = FeedNamespace> + '_ {
        self.parsers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl fmt::Debug for NamespaceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceRegistry")
            .field("namespaces", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`NamespaceRegistry`].
pub struct NamespaceRegistryBuilder {
    parsers: BTreeMap<FeedNamespace, Box<dyn NamespaceParser>>,
}

impl NamespaceRegistryBuilder {
    /// Creates a builder with every built-in parser enabled.
    pub fn new() -> Self {
        let parsers = FeedNamespace::ALL
            .into_iter()
            .map(|ns| (ns, standard_parser(ns)))
            .collect();
        Self { parsers }
    }

    /// Creates a builder with no parser enabled.
    pub fn empty() -> Self {
        Self {
            parsers: BTreeMap::new(),
        }
    }

    /// Enables the built-in parser for `namespace`.
    pub fn enable(mut self, namespace: FeedNamespace) -> Self {
        self.parsers.insert(namespace, standard_parser(namespace));
        self
    }

    /// Disables `namespace`; its elements are then treated as unknown.
    pub fn disable(mut self, namespace: FeedNamespace) -> Self {
        self.parsers.remove(&namespace);
        self
    }

    /// Registers a custom parser, replacing any parser for the same namespace.
    pub fn parser(mut self, parser: Box<dyn NamespaceParser>) -> Self {
        self.parsers.insert(parser.namespace(), parser);
        self
    }

    pub fn build(self) -> NamespaceRegistry {
        NamespaceRegistry {
            parsers: self.parsers,
        }
    }
}

impl Default for NamespaceRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_has_every_namespace() {
        let registry = NamespaceRegistry::standard();
        assert_eq!(registry.len(), FeedNamespace::ALL.len());
        for ns in FeedNamespace::ALL {
            assert_eq!(registry.get(ns).map(|p| p.namespace()), Some(ns));
        }
    }

    #[test]
    fn test_disable_and_enable() {
        let registry = NamespaceRegistry::builder()
            .disable(FeedNamespace::Itunes)
            .disable(FeedNamespace::Feedpress)
            .build();
        assert!(registry.get(FeedNamespace::Itunes).is_none());
        assert_eq!(registry.len(), 4);

        let registry = NamespaceRegistryBuilder::empty()
            .enable(FeedNamespace::Podcastindex)
            .build();
        let namespaces: Vec<FeedNamespace> = registry.namespaces().collect();
        assert_eq!(namespaces, vec![FeedNamespace::Podcastindex]);
    }

    #[test]
    fn test_lookup_by_alias_uri() {
        let registry = default_registry();
        let parser = registry
            .parser_for_uri("http://www.itunes.com/DTDs/Podcast-1.0.dtd")
            .map(|p| p.namespace());
        assert_eq!(parser, Some(FeedNamespace::Itunes));
        assert!(registry.parser_for_uri("http://example.com/unknown").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = NamespaceRegistryBuilder::empty().build();
        assert!(registry.is_empty());
        assert!(NamespaceRegistry::default().is_empty());
    }
}
