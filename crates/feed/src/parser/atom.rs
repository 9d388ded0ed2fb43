// ABOUTME: Parser for Atom elements embedded in RSS: authors, contributors and links.
// ABOUTME: Link hrefs are resolved against xml:base when the feed does not supply hrefResolved.

use url::Url;

use crate::builder::{
    AtomBuilder, Builder, EpisodeBuilder, LinkBuilder, PersonBuilder, PodcastBuilder,
};
use crate::dom::Element;
use crate::extract::{attribute_value, to_person_builder};
use crate::namespace::FeedNamespace;
use crate::parser::{log_dropped, NamespaceParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct AtomParser;

enum AtomEntry {
    Author(PersonBuilder),
    Contributor(PersonBuilder),
    Link(LinkBuilder),
}

impl AtomEntry {
    fn apply(self, atom: AtomBuilder) -> AtomBuilder {
        match self {
            AtomEntry::Author(person) => atom.add_author_builder(person),
            AtomEntry::Contributor(person) => atom.add_contributor_builder(person),
            AtomEntry::Link(link) => atom.add_link_builder(link),
        }
    }
}

fn read_entry(element: &Element) -> Option<AtomEntry> {
    let entry = match element.local_name() {
        "author" => AtomEntry::Author(to_person_builder(element, element.namespace())),
        "contributor" => AtomEntry::Contributor(to_person_builder(element, element.namespace())),
        "link" => AtomEntry::Link(to_link_builder(element)),
        _ => return None,
    };
    let ready = match &entry {
        AtomEntry::Author(person) | AtomEntry::Contributor(person) => {
            person.has_enough_data_to_build()
        }
        AtomEntry::Link(link) => link.has_enough_data_to_build(),
    };
    if !ready {
        log_dropped(element, "missing name or href");
        return None;
    }
    Some(entry)
}

fn to_link_builder(element: &Element) -> LinkBuilder {
    let Some(href) = attribute_value(element, "href") else {
        return LinkBuilder::default();
    };
    let href_resolved = attribute_value(element, "hrefResolved")
        .or_else(|| resolve_against_base(element, &href));
    LinkBuilder::default()
        .href(href)
        .href_lang(attribute_value(element, "hreflang"))
        .href_resolved(href_resolved)
        .length(attribute_value(element, "length"))
        .rel(attribute_value(element, "rel"))
        .title(attribute_value(element, "title"))
        .mime_type(attribute_value(element, "type"))
}

fn resolve_against_base(element: &Element, href: &str) -> Option<String> {
    let base = Url::parse(&attribute_value(element, "xml:base")?).ok()?;
    base.join(href).ok().map(String::from)
}

impl NamespaceParser for AtomParser {
    fn namespace(&self) -> FeedNamespace {
        FeedNamespace::Atom
    }

    fn parse_channel(&self, element: &Element, builder: PodcastBuilder) -> PodcastBuilder {
        match read_entry(element) {
            Some(entry) => builder.with_atom(|atom| entry.apply(atom)),
            None => builder,
        }
    }

    fn parse_item(&self, element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder {
        match read_entry(element) {
            Some(entry) => builder.with_atom(|atom| entry.apply(atom)),
            None => builder,
        }
    }
}
