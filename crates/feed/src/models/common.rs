// ABOUTME: Value types shared by podcasts and episodes: links, people, images, categories.
// ABOUTME: Image and Category are closed enums over their RSS and iTunes-style variants.

use serde::{Deserialize, Serialize};

use crate::builder::{
    AtomBuilder, HrefOnlyImageBuilder, ItunesCategoryBuilder, LinkBuilder, PersonBuilder,
    RssCategoryBuilder, RssImageBuilder,
};

/// A hyperlink, as found in `atom:link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub href_lang: Option<String>,
    /// `href` resolved against the element's `xml:base`, when one applies.
    pub href_resolved: Option<String>,
    pub length: Option<String>,
    pub rel: Option<String>,
    pub title: Option<String>,
    pub mime_type: Option<String>,
}

impl Link {
    pub fn builder() -> LinkBuilder {
        LinkBuilder::default()
    }
}

/// A person: an Atom author/contributor or an iTunes owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: Option<String>,
    pub uri: Option<String>,
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }
}

/// The RSS `<image>` element. `url`, `title` and `link` only exist together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RssImage {
    pub url: String,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub height: Option<i32>,
    pub width: Option<i32>,
}

impl RssImage {
    pub fn builder() -> RssImageBuilder {
        RssImageBuilder::default()
    }
}

/// An image given only by an `href` attribute (`itunes:image`, `googleplay:image`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrefOnlyImage {
    pub href: String,
}

impl HrefOnlyImage {
    pub fn builder() -> HrefOnlyImageBuilder {
        HrefOnlyImageBuilder::default()
    }
}

/// Any image depicting a podcast or episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Image {
    Rss(RssImage),
    HrefOnly(HrefOnlyImage),
}

impl Image {
    /// The URL of the depicted image.
    pub fn url(&self) -> &str {
        match self {
            Image::Rss(image) => &image.url,
            Image::HrefOnly(image) => &image.href,
        }
    }
}

impl From<RssImage> for Image {
    fn from(image: RssImage) -> Self {
        Image::Rss(image)
    }
}

impl From<HrefOnlyImage> for Image {
    fn from(image: HrefOnlyImage) -> Self {
        Image::HrefOnly(image)
    }
}

/// A flat RSS `<category>` with an optional taxonomy domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RssCategory {
    pub name: String,
    pub domain: Option<String>,
}

impl RssCategory {
    pub fn builder() -> RssCategoryBuilder {
        RssCategoryBuilder::default()
    }
}

/// An iTunes-style category with at most one level of nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItunesCategory {
    pub name: String,
    pub subcategory: Option<String>,
}

impl ItunesCategory {
    pub fn builder() -> ItunesCategoryBuilder {
        ItunesCategoryBuilder::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Category {
    Flat(RssCategory),
    Hierarchical(ItunesCategory),
}

impl Category {
    pub fn name(&self) -> &str {
        match self {
            Category::Flat(category) => &category.name,
            Category::Hierarchical(category) => &category.name,
        }
    }
}

impl From<RssCategory> for Category {
    fn from(category: RssCategory) -> Self {
        Category::Flat(category)
    }
}

impl From<ItunesCategory> for Category {
    fn from(category: ItunesCategory) -> Self {
        Category::Hierarchical(category)
    }
}

/// Atom elements embedded in an RSS channel or item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,
    pub links: Vec<Link>,
}

impl Atom {
    pub fn builder() -> AtomBuilder {
        AtomBuilder::default()
    }
}
