//! Helpers for navigating geoLink XML trees.

use chrono::NaiveDate;
use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use geolink2oereb::xml::get_tag_name;
///
/// let xml = r#"<geolinks><document id="1"/></geolinks>"#;
/// let doc = Document::parse(xml).unwrap();
/// let document = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(document), "document");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use geolink2oereb::xml::find_children;
///
/// let xml = r#"<document><file/><file/><other/></document>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(find_children(doc.root_element(), "file").count(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Get a trimmed attribute value, treating empty values as absent.
///
/// ÖREBlex writes empty attributes for unset values, so `title=""` and a
/// missing `title` mean the same thing.
pub fn get_attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Get an attribute holding a `YYYY-MM-DD` date.
///
/// Values that are not valid dates are logged and treated as absent.
pub fn get_date_attribute(node: Node<'_, '_>, name: &str) -> Option<NaiveDate> {
    let value = get_attribute(node, name)?;
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(attribute = name, value, error = %e, "Ignoring invalid date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:geolinks xmlns:ns="http://example.com"><ns:document/></ns:geolinks>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "geolinks");
    }

    #[test]
    fn test_has_tag() {
        let doc = Document::parse("<file/>").unwrap();
        assert!(has_tag(doc.root_element(), "file"));
        assert!(!has_tag(doc.root_element(), "document"));
    }

    #[test]
    fn test_find_children_skips_text() {
        let xml = r#"<document>text<file/>more<file/></document>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(find_children(doc.root_element(), "file").count(), 2);
    }

    #[test]
    fn test_get_attribute() {
        let xml = r#"<document title="  Titel " number="" />"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(get_attribute(root, "title"), Some("Titel".to_string()));
        assert_eq!(get_attribute(root, "number"), None);
        assert_eq!(get_attribute(root, "missing"), None);
    }

    #[test]
    fn test_get_date_attribute() {
        let xml = r#"<document enactment_date="2019-01-01" decree_date="01.01.2019"/>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(
            get_date_attribute(root, "enactment_date"),
            NaiveDate::from_ymd_opt(2019, 1, 1)
        );
        assert_eq!(get_date_attribute(root, "decree_date"), None);
        assert_eq!(get_date_attribute(root, "abrogation_date"), None);
    }
}
