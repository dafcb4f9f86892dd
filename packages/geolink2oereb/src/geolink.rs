//! geoLink XML parsing.
//!
//! ÖREBlex answers a geoLink request with a `<geolinks>` element holding one
//! `<document>` per legal document. Documents carry their metadata as
//! attributes and list their files as `<file>` children:
//!
//! ```xml
//! <geolinks>
//!   <document id="5" category="main" doctype="decree" title="..." ...>
//!     <file category="main" href="/api/attachments/17906" title="..."/>
//!   </document>
//! </geolinks>
//! ```

use chrono::NaiveDate;
use roxmltree::{Document, Node};

use crate::error::{ConversionError, Result};
use crate::xml::{find_children, get_attribute, get_date_attribute, get_tag_name};

/// Root element of a geoLink response.
const ROOT_TAG: &str = "geolinks";

/// A file attached to a geoLink document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeolinkFile {
    pub href: String,
    pub title: Option<String>,
}

/// One document of a geoLink response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeolinkDocument {
    pub id: String,

    /// `main`, `related` or `assigned`.
    pub category: Option<String>,

    /// `decree`, `edict` or `notice`.
    pub doctype: Option<String>,

    /// Federal level (e.g. "Bund", "Kanton", "Gemeinde").
    pub federal_level: Option<String>,

    pub authority: Option<String>,
    pub authority_url: Option<String>,
    pub title: Option<String>,
    pub number: Option<String>,
    pub abbreviation: Option<String>,
    pub instance: Option<String>,
    pub document_type: Option<String>,
    pub subtype: Option<String>,
    pub municipality: Option<String>,
    pub index: Option<i32>,
    pub enactment_date: Option<NaiveDate>,
    pub abrogation_date: Option<NaiveDate>,
    pub files: Vec<GeolinkFile>,
}

impl GeolinkDocument {
    /// Value of a text attribute by its geoLink name.
    ///
    /// Used for the configurable attribute mapping of official number and
    /// abbreviation.
    #[must_use]
    pub fn text_attribute(&self, name: &str) -> Option<&str> {
        let value = match name {
            "title" => &self.title,
            "number" => &self.number,
            "abbreviation" => &self.abbreviation,
            "instance" => &self.instance,
            "type" => &self.document_type,
            "subtype" => &self.subtype,
            "authority" => &self.authority,
            "municipality" => &self.municipality,
            _ => {
                tracing::warn!(attribute = name, "Unknown geoLink attribute in mapping");
                return None;
            }
        };
        value.as_deref()
    }

    #[must_use]
    pub fn is_doctype(&self, doctype: &str) -> bool {
        self.doctype.as_deref() == Some(doctype)
    }
}

/// Parse a geoLink XML response.
///
/// # Returns
/// The documents in response order
pub fn parse_geolinks(xml: &str) -> Result<Vec<GeolinkDocument>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    if get_tag_name(root) != ROOT_TAG {
        return Err(ConversionError::InvalidGeolink(format!(
            "expected <{ROOT_TAG}> root element, found <{}>",
            get_tag_name(root)
        )));
    }

    find_children(root, "document").map(parse_document).collect()
}

fn parse_document(node: Node<'_, '_>) -> Result<GeolinkDocument> {
    let id = get_attribute(node, "id").ok_or_else(|| {
        ConversionError::InvalidGeolink("<document> without id attribute".to_string())
    })?;

    let index = get_attribute(node, "index").and_then(|value| match value.parse() {
        Ok(index) => Some(index),
        Err(_) => {
            tracing::warn!(document_id = %id, value, "Ignoring non-numeric index");
            None
        }
    });

    let files = find_children(node, "file")
        .filter_map(|file| parse_file(file, &id))
        .collect();

    Ok(GeolinkDocument {
        category: get_attribute(node, "category"),
        doctype: get_attribute(node, "doctype"),
        federal_level: get_attribute(node, "federal_level"),
        authority: get_attribute(node, "authority"),
        authority_url: get_attribute(node, "authority_url"),
        title: get_attribute(node, "title"),
        number: get_attribute(node, "number"),
        abbreviation: get_attribute(node, "abbreviation"),
        instance: get_attribute(node, "instance"),
        document_type: get_attribute(node, "type"),
        subtype: get_attribute(node, "subtype"),
        municipality: get_attribute(node, "municipality"),
        index,
        enactment_date: get_date_attribute(node, "enactment_date"),
        abrogation_date: get_date_attribute(node, "abrogation_date"),
        files,
        id,
    })
}

fn parse_file(node: Node<'_, '_>, document_id: &str) -> Option<GeolinkFile> {
    let Some(href) = get_attribute(node, "href") else {
        tracing::warn!(document_id, "Skipping <file> without href");
        return None;
    };

    Some(GeolinkFile {
        href,
        title: get_attribute(node, "title"),
    })
}
