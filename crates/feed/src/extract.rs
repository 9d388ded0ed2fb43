// ABOUTME: Total helpers that pull trimmed text, booleans, numbers and dates out of DOM elements.
// ABOUTME: Also turns common element shapes (images, people, categories) into sub-builders.

use chrono::{DateTime, TimeDelta, Utc};

use crate::builder::{
    HrefOnlyImageBuilder, ItunesCategoryBuilder, PersonBuilder, RssCategoryBuilder,
    RssImageBuilder,
};
use crate::dom::Element;
use crate::duration_parse::parse_duration;
use crate::time_parse::parse_flexible_time;

/// Trims `s`, returning `None` when nothing is left.
pub fn trimmed_or_none(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The element's text content, trimmed, or `None` if blank.
pub fn text_or_none(element: &Element) -> Option<String> {
    trimmed_or_none(&element.text_content())
}

/// Case-insensitive `true`/`yes` and `false`/`no`.
pub fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

pub fn text_as_bool(element: &Element) -> Option<bool> {
    parse_bool(Some(element.text_content().as_str()))
}

pub fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

pub fn text_as_int(element: &Element) -> Option<i32> {
    parse_int(&element.text_content())
}

pub fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

pub fn text_as_date(element: &Element) -> Option<DateTime<Utc>> {
    parse_flexible_time(text_or_none(element)?.as_str())
}

pub fn text_as_duration(element: &Element) -> Option<TimeDelta> {
    parse_duration(text_or_none(element)?.as_str())
}

/// The named attribute, trimmed, or `None` if missing or blank.
pub fn attribute_value(element: &Element, name: &str) -> Option<String> {
    trimmed_or_none(element.attribute(name)?)
}

/// Direct child elements in `namespace`, in document order. `None` yields
/// every child element.
pub fn children_in<'a>(
    element: &'a Element,
    namespace: Option<&'a str>,
) -> impl Iterator<Item = &'a Element> + 'a {
    element
        .child_elements()
        .filter(move |child| namespace.is_none() || child.namespace() == namespace)
}

/// First direct child element named `local_name` in `namespace`.
pub fn find_child<'a>(
    element: &'a Element,
    local_name: &str,
    namespace: Option<&'a str>,
) -> Option<&'a Element> {
    element
        .child_elements()
        .find(|child| child.local_name() == local_name && child.namespace() == namespace)
}

/// Reads an RSS `<image>` (children `url`, `title`, `link`, `description`,
/// `height`, `width`) whose children live in `namespace`.
pub fn to_rss_image_builder(element: &Element, namespace: Option<&str>) -> RssImageBuilder {
    let mut builder = RssImageBuilder::default();
    for child in element.child_elements().filter(|c| c.namespace() == namespace) {
        builder = match child.local_name() {
            "url" => match text_or_none(child) {
                Some(url) => builder.url(url),
                None => builder,
            },
            "title" => match text_or_none(child) {
                Some(title) => builder.title(title),
                None => builder,
            },
            "link" => match text_or_none(child) {
                Some(link) => builder.link(link),
                None => builder,
            },
            "description" => builder.description(text_or_none(child)),
            "height" => builder.height(text_as_int(child)),
            "width" => builder.width(text_as_int(child)),
            _ => builder,
        };
    }
    builder
}

/// Reads an image expressed as an `href` attribute.
pub fn to_href_only_image_builder(element: &Element) -> HrefOnlyImageBuilder {
    match attribute_value(element, "href") {
        Some(href) => HrefOnlyImageBuilder::default().href(href),
        None => HrefOnlyImageBuilder::default(),
    }
}

/// Reads `name`, `email` and `uri` children in `namespace`.
pub fn to_person_builder(element: &Element, namespace: Option<&str>) -> PersonBuilder {
    let mut builder = PersonBuilder::default();
    for child in element.child_elements().filter(|c| c.namespace() == namespace) {
        let value = text_or_none(child);
        builder = match (child.local_name(), value) {
            ("name", Some(name)) => builder.name(name),
            ("email", value) => builder.email(value),
            ("uri", value) => builder.uri(value),
            (_, _) => builder,
        };
    }
    builder
}

/// `None` when the category text is blank.
pub fn to_rss_category_builder(element: &Element) -> Option<RssCategoryBuilder> {
    let name = text_or_none(element)?;
    Some(
        RssCategoryBuilder::default()
            .name(name)
            .domain(attribute_value(element, "domain")),
    )
}

/// Reads the `text` attribute and an optional nested `category` child (same
/// namespace) as the subcategory.
pub fn to_itunes_category_builder(element: &Element) -> ItunesCategoryBuilder {
    let Some(name) = attribute_value(element, "text") else {
        return ItunesCategoryBuilder::default();
    };
    let subcategory = find_child(element, "category", element.namespace())
        .and_then(|sub| attribute_value(sub, "text"));
    ItunesCategoryBuilder::default()
        .name(name)
        .subcategory(subcategory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use pretty_assertions::assert_eq;

    const ITUNES: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

    #[test]
    fn test_trimmed_or_none() {
        assert_eq!(trimmed_or_none("  hello \n"), Some("hello".to_string()));
        assert_eq!(trimmed_or_none(" \t\n"), None);
        assert_eq!(trimmed_or_none(""), None);
    }

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool(Some("Yes")), Some(true));
        assert_eq!(parse_bool(Some(" TRUE ")), Some(true));
        assert_eq!(parse_bool(Some("no")), Some(false));
        assert_eq!(parse_bool(Some("False")), Some(false));
        assert_eq!(parse_bool(Some("clean")), None);
        assert_eq!(parse_bool(Some("")), None);
        assert_eq!(parse_bool(None), None);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("4.2"), None);
        assert_eq!(parse_u64("123456789012"), Some(123_456_789_012));
        assert_eq!(parse_u64("-1"), None);
    }

    #[test]
    fn test_attribute_value_blank_is_none() {
        let element = Element::new(None, "enclosure")
            .with_attribute("url", "  https://example.com/a.mp3 ")
            .with_attribute("type", "   ");
        assert_eq!(
            attribute_value(&element, "url"),
            Some("https://example.com/a.mp3".to_string())
        );
        assert_eq!(attribute_value(&element, "type"), None);
        assert_eq!(attribute_value(&element, "length"), None);
    }

    #[test]
    fn test_children_in_filters_by_namespace() {
        let element = Element::new(None, "item")
            .with_child(Element::new(None, "title"))
            .with_child(Element::new(Some(ITUNES), "title"))
            .with_child(Element::new(None, "link"));
        let core: Vec<&str> = children_in(&element, None).map(|c| c.local_name()).collect();
        assert_eq!(core, vec!["title", "title", "link"]);
        let itunes: Vec<&str> = children_in(&element, Some(ITUNES))
            .map(|c| c.local_name())
            .collect();
        assert_eq!(itunes, vec!["title"]);
    }

    #[test]
    fn test_rss_image_builder_reads_children() {
        let element = Element::new(None, "image")
            .with_child(Element::new(None, "url").with_text("https://example.com/i.png"))
            .with_child(Element::new(None, "title").with_text("Show"))
            .with_child(Element::new(None, "link").with_text("https://example.com"))
            .with_child(Element::new(None, "width").with_text("144"))
            .with_child(Element::new(None, "height").with_text("tall"));
        let image = to_rss_image_builder(&element, None).build().unwrap();
        assert_eq!(image.width, Some(144));
        assert_eq!(image.height, None);
        assert_eq!(image.title, "Show");
    }

    #[test]
    fn test_person_builder_skips_blank_name() {
        let element = Element::new(Some(ITUNES), "owner")
            .with_child(Element::new(Some(ITUNES), "name").with_text("  "))
            .with_child(Element::new(Some(ITUNES), "email").with_text("me@example.com"));
        assert!(!to_person_builder(&element, Some(ITUNES)).has_enough_data_to_build());
    }

    #[test]
    fn test_rss_category_blank_is_none() {
        assert!(to_rss_category_builder(&Element::new(None, "category").with_text(" ")).is_none());
        let category = to_rss_category_builder(
            &Element::new(None, "category")
                .with_attribute("domain", "dmoz")
                .with_text("Tech"),
        )
        .and_then(|b| b.build())
        .unwrap();
        assert_eq!(category.domain.as_deref(), Some("dmoz"));
    }

    #[test]
    fn test_itunes_category_with_subcategory() {
        let element = Element::new(Some(ITUNES), "category")
            .with_attribute("text", "Technology")
            .with_child(
                Element::new(Some(ITUNES), "category").with_attribute("text", "Podcasting"),
            );
        let category = to_itunes_category_builder(&element).build().unwrap();
        assert_eq!(category.name, "Technology");
        assert_eq!(category.subcategory.as_deref(), Some("Podcasting"));
    }

    #[test]
    fn test_text_as_date_and_duration() {
        let date = Element::new(None, "pubDate").with_text(" Fri, 21 Feb 2020 10:00:00 +0000 ");
        assert!(text_as_date(&date).is_some());
        assert_eq!(text_as_date(&Element::new(None, "pubDate").with_text("soon")), None);

        let duration = Element::new(Some(ITUNES), "duration").with_text("1:00:05");
        assert_eq!(text_as_duration(&duration), TimeDelta::try_seconds(3605));
    }
}
