// ABOUTME: Builders for the shared value types: links, people, images, categories, and Atom blocks.
// ABOUTME: Each builder stores raw values and only validates when asked to build.

use crate::builder::{any_ready, build_all, Builder};
use crate::models::{Atom, HrefOnlyImage, ItunesCategory, Link, Person, RssCategory, RssImage};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkBuilder {
    href: Option<String>,
    href_lang: Option<String>,
    href_resolved: Option<String>,
    length: Option<String>,
    rel: Option<String>,
    title: Option<String>,
    mime_type: Option<String>,
}

impl LinkBuilder {
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn href_lang(mut self, href_lang: Option<String>) -> Self {
        self.href_lang = href_lang;
        self
    }

    pub fn href_resolved(mut self, href_resolved: Option<String>) -> Self {
        self.href_resolved = href_resolved;
        self
    }

    pub fn length(mut self, length: Option<String>) -> Self {
        self.length = length;
        self
    }

    pub fn rel(mut self, rel: Option<String>) -> Self {
        self.rel = rel;
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn mime_type(mut self, mime_type: Option<String>) -> Self {
        self.mime_type = mime_type;
        self
    }
}

impl Builder for LinkBuilder {
    type Model = Link;

    fn has_enough_data_to_build(&self) -> bool {
        self.href.is_some()
    }

    fn build(self) -> Option<Link> {
        Some(Link {
            href: self.href?,
            href_lang: self.href_lang,
            href_resolved: self.href_resolved,
            length: self.length,
            rel: self.rel,
            title: self.title,
            mime_type: self.mime_type,
        })
    }

    fn from_model(self, model: &Link) -> Self {
        self.href(model.href.clone())
            .href_lang(model.href_lang.clone())
            .href_resolved(model.href_resolved.clone())
            .length(model.length.clone())
            .rel(model.rel.clone())
            .title(model.title.clone())
            .mime_type(model.mime_type.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonBuilder {
    name: Option<String>,
    email: Option<String>,
    uri: Option<String>,
}

impl PersonBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn uri(mut self, uri: Option<String>) -> Self {
        self.uri = uri;
        self
    }
}

impl Builder for PersonBuilder {
    type Model = Person;

    fn has_enough_data_to_build(&self) -> bool {
        self.name.is_some()
    }

    fn build(self) -> Option<Person> {
        Some(Person {
            name: self.name?,
            email: self.email,
            uri: self.uri,
        })
    }

    fn from_model(self, model: &Person) -> Self {
        self.name(model.name.clone())
            .email(model.email.clone())
            .uri(model.uri.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssImageBuilder {
    url: Option<String>,
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    height: Option<i32>,
    width: Option<i32>,
}

impl RssImageBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn height(mut self, height: Option<i32>) -> Self {
        self.height = height;
        self
    }

    pub fn width(mut self, width: Option<i32>) -> Self {
        self.width = width;
        self
    }
}

impl Builder for RssImageBuilder {
    type Model = RssImage;

    fn has_enough_data_to_build(&self) -> bool {
        self.url.is_some() && self.title.is_some() && self.link.is_some()
    }

    fn build(self) -> Option<RssImage> {
        Some(RssImage {
            url: self.url?,
            title: self.title?,
            link: self.link?,
            description: self.description,
            height: self.height,
            width: self.width,
        })
    }

    fn from_model(self, model: &RssImage) -> Self {
        self.url(model.url.clone())
            .title(model.title.clone())
            .link(model.link.clone())
            .description(model.description.clone())
            .height(model.height)
            .width(model.width)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrefOnlyImageBuilder {
    href: Option<String>,
}

impl HrefOnlyImageBuilder {
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl Builder for HrefOnlyImageBuilder {
    type Model = HrefOnlyImage;

    fn has_enough_data_to_build(&self) -> bool {
        self.href.is_some()
    }

    fn build(self) -> Option<HrefOnlyImage> {
        Some(HrefOnlyImage { href: self.href? })
    }

    fn from_model(self, model: &HrefOnlyImage) -> Self {
        self.href(model.href.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssCategoryBuilder {
    name: Option<String>,
    domain: Option<String>,
}

impl RssCategoryBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn domain(mut self, domain: Option<String>) -> Self {
        self.domain = domain;
        self
    }
}

impl Builder for RssCategoryBuilder {
    type Model = RssCategory;

    fn has_enough_data_to_build(&self) -> bool {
        self.name.is_some()
    }

    fn build(self) -> Option<RssCategory> {
        Some(RssCategory {
            name: self.name?,
            domain: self.domain,
        })
    }

    fn from_model(self, model: &RssCategory) -> Self {
        self.name(model.name.clone()).domain(model.domain.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItunesCategoryBuilder {
    name: Option<String>,
    subcategory: Option<String>,
}

impl ItunesCategoryBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn subcategory(mut self, subcategory: Option<String>) -> Self {
        self.subcategory = subcategory;
        self
    }
}

impl Builder for ItunesCategoryBuilder {
    type Model = ItunesCategory;

    fn has_enough_data_to_build(&self) -> bool {
        self.name.is_some()
    }

    fn build(self) -> Option<ItunesCategory> {
        Some(ItunesCategory {
            name: self.name?,
            subcategory: self.subcategory,
        })
    }

    fn from_model(self, model: &ItunesCategory) -> Self {
        self.name(model.name.clone())
            .subcategory(model.subcategory.clone())
    }
}

/// Collects `atom:author`, `atom:contributor` and `atom:link` entries.
/// The block exists as soon as one of them can be built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomBuilder {
    author_builders: Vec<PersonBuilder>,
    contributor_builders: Vec<PersonBuilder>,
    link_builders: Vec<LinkBuilder>,
}

impl AtomBuilder {
    pub fn add_author_builder(mut self, author: PersonBuilder) -> Self {
        self.author_builders.push(author);
        self
    }

    pub fn add_contributor_builder(mut self, contributor: PersonBuilder) -> Self {
        self.contributor_builders.push(contributor);
        self
    }

    pub fn add_link_builder(mut self, link: LinkBuilder) -> Self {
        self.link_builders.push(link);
        self
    }
}

impl Builder for AtomBuilder {
    type Model = Atom;

    fn has_enough_data_to_build(&self) -> bool {
        any_ready(&self.author_builders)
            || any_ready(&self.contributor_builders)
            || any_ready(&self.link_builders)
    }

    fn build(self) -> Option<Atom> {
        if !self.has_enough_data_to_build() {
            return None;
        }
        Some(Atom {
            authors: build_all(self.author_builders),
            contributors: build_all(self.contributor_builders),
            links: build_all(self.link_builders),
        })
    }

    fn from_model(mut self, model: &Atom) -> Self {
        for author in &model.authors {
            self = self.add_author_builder(PersonBuilder::default().from_model(author));
        }
        for contributor in &model.contributors {
            self = self.add_contributor_builder(PersonBuilder::default().from_model(contributor));
        }
        for link in &model.links {
            self = self.add_link_builder(LinkBuilder::default().from_model(link));
        }
        self
    }
}
