//! Core record types read from the ÖREBlex registry.
//!
//! These types mirror the document model of the ÖREB extract: a document
//! with its type, law status and responsible office. Multilingual values are
//! kept as language -> text maps so language variants can be merged.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Mapping from language code (e.g. "de") to a localised string.
pub type LocalisedText = BTreeMap<String, String>;

/// Build a single-language [`LocalisedText`].
#[must_use]
pub fn localised(language: &str, text: impl Into<String>) -> LocalisedText {
    let mut map = LocalisedText::new();
    map.insert(language.to_string(), text.into());
    map
}

/// A web address as delivered by the registry.
///
/// ÖREBlex returns one plain URL per language read. Before merging, plain
/// values are rewritten into a localised map keyed by the read's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebAddress {
    /// A bare URL without language information.
    Plain(String),

    /// Per-language URLs.
    Localised(LocalisedText),
}

impl WebAddress {
    /// Return the localised map, if this address already is one.
    #[must_use]
    pub fn as_localised(&self) -> Option<&LocalisedText> {
        match self {
            Self::Localised(map) => Some(map),
            Self::Plain(_) => None,
        }
    }
}

/// Natural key of a record inside one geoLink collection.
///
/// The registry produces one record per file of a document, so the key is
/// the registry's document id plus the position of the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceKey {
    /// Document id as delivered by ÖREBlex.
    pub document_id: String,

    /// Position of the file within the document.
    pub file_index: usize,
}

impl SourceKey {
    #[must_use]
    pub fn new(document_id: impl Into<String>, file_index: usize) -> Self {
        Self {
            document_id: document_id.into(),
            file_index,
        }
    }
}

/// Type of a legal document (e.g. legal provision, law, hint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTypeRecord {
    /// Type code; `None` once a lookup found no match.
    pub code: Option<String>,

    /// Multilingual title.
    pub title: Option<LocalisedText>,
}

impl DocumentTypeRecord {
    #[must_use]
    pub fn new(code: impl Into<String>, title: Option<LocalisedText>) -> Self {
        Self {
            code: Some(code.into()),
            title,
        }
    }
}

/// Law status of a document (e.g. in force).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawStatusRecord {
    /// Status code; `None` once a lookup found no match.
    pub code: Option<String>,

    /// Multilingual title.
    pub title: Option<LocalisedText>,
}

impl LawStatusRecord {
    #[must_use]
    pub fn new(code: impl Into<String>, title: Option<LocalisedText>) -> Self {
        Self {
            code: Some(code.into()),
            title,
        }
    }

    /// Status passed to every registry read: documents delivered by ÖREBlex
    /// are in force.
    #[must_use]
    pub fn in_force() -> Self {
        let title = [
            ("de", "in Kraft"),
            ("fr", "En vigueur"),
            ("it", "In vigore"),
            ("rm", "En vigur"),
            ("en", "In force"),
        ]
        .into_iter()
        .map(|(language, text)| (language.to_string(), text.to_string()))
        .collect();
        Self::new(crate::config::DEFAULT_LAW_STATUS_CODE, Some(title))
    }
}

/// Government office responsible for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeRecord {
    /// Multilingual name.
    pub name: Option<LocalisedText>,

    /// Web address of the office.
    pub office_at_web: Option<WebAddress>,

    /// Business identifier (UID).
    pub uid: Option<String>,

    /// Address line 1.
    pub line1: Option<String>,

    /// Address line 2.
    pub line2: Option<String>,

    /// Street.
    pub street: Option<String>,

    /// House number.
    pub number: Option<String>,

    /// Postal code.
    pub postal_code: Option<u32>,

    /// City.
    pub city: Option<String>,
}

impl OfficeRecord {
    /// Create an office with a name and no further details.
    #[must_use]
    pub fn new(name: LocalisedText) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_office_at_web(mut self, office_at_web: WebAddress) -> Self {
        self.office_at_web = Some(office_at_web);
        self
    }
}

/// One legal document as known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Natural key used to match language variants.
    pub source_key: SourceKey,

    pub document_type: DocumentTypeRecord,

    /// Sort index inside the extract.
    pub index: Option<i32>,

    pub law_status: LawStatusRecord,

    pub title: Option<LocalisedText>,

    pub responsible_office: OfficeRecord,

    /// Start of the publication interval.
    pub published_from: NaiveDate,

    /// End of the publication interval, if any.
    pub published_until: Option<NaiveDate>,

    pub text_at_web: Option<LocalisedText>,

    pub abbreviation: Option<LocalisedText>,

    pub official_number: Option<LocalisedText>,

    /// Municipality (BFS number) the document is restricted to.
    pub only_in_municipality: Option<u32>,
}

impl DocumentRecord {
    /// Create a record with the mandatory attributes set.
    #[must_use]
    pub fn new(
        source_key: SourceKey,
        document_type: DocumentTypeRecord,
        law_status: LawStatusRecord,
        title: LocalisedText,
        responsible_office: OfficeRecord,
        published_from: NaiveDate,
    ) -> Self {
        Self {
            source_key,
            document_type,
            index: None,
            law_status,
            title: Some(title),
            responsible_office,
            published_from,
            published_until: None,
            text_at_web: None,
            abbreviation: None,
            official_number: None,
            only_in_municipality: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localised() {
        let text = localised("de", "Titel");
        assert_eq!(text.len(), 1);
        assert_eq!(text.get("de").map(String::as_str), Some("Titel"));
    }

    #[test]
    fn test_web_address_as_localised() {
        assert!(WebAddress::Plain("https://a.ch".to_string())
            .as_localised()
            .is_none());
        let map = localised("it", "https://a.ch");
        assert_eq!(WebAddress::Localised(map.clone()).as_localised(), Some(&map));
    }

    #[test]
    fn test_law_status_in_force() {
        let status = LawStatusRecord::in_force();
        assert_eq!(status.code.as_deref(), Some("inForce"));
        let title = status.title.unwrap_or_default();
        assert_eq!(title.get("rm").map(String::as_str), Some("En vigur"));
        assert_eq!(title.len(), 5);
    }

    #[test]
    fn test_source_key_ordering() {
        assert!(SourceKey::new("1", 0) < SourceKey::new("1", 1));
        assert_eq!(SourceKey::new("7", 2), SourceKey::new("7".to_string(), 2));
    }
}
