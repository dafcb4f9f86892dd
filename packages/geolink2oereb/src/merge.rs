//! Merging of language variants.
//!
//! ÖREBlex delivers one language per request. The records of the master
//! language are extended with the multilingual attributes of every other
//! language read, matched by their [`SourceKey`].

use std::collections::HashMap;

use crate::types::{
    localised, DocumentRecord, DocumentTypeRecord, LocalisedText, OfficeRecord, SourceKey,
    WebAddress,
};

/// Merge two optional multilingual attributes.
///
/// Both unset gives unset, a single mapping is taken as is, and two mappings
/// are unioned with the merger's value winning on a shared language.
///
/// # Examples
/// ```
/// use geolink2oereb::merge::merge_attribute;
/// use geolink2oereb::types::localised;
///
/// let merged = merge_attribute(Some(localised("en", "test")), Some(localised("de", "test")));
/// let languages: Vec<_> = merged.unwrap().into_keys().collect();
/// assert_eq!(languages, ["de", "en"]);
/// ```
#[must_use]
pub fn merge_attribute(
    master: Option<LocalisedText>,
    merger: Option<LocalisedText>,
) -> Option<LocalisedText> {
    match (master, merger) {
        (None, None) => None,
        (Some(master), None) => Some(master),
        (None, Some(merger)) => Some(merger),
        (Some(mut master), Some(merger)) => {
            master.extend(merger);
            Some(master)
        }
    }
}

/// Merge two optional web addresses.
///
/// Localised addresses follow [`merge_attribute`]. A plain address on either
/// side cannot be merged and yields unset; this is logged because the value
/// is lost.
#[must_use]
pub fn merge_web_address(
    master: Option<WebAddress>,
    merger: Option<WebAddress>,
) -> Option<WebAddress> {
    match (master, merger) {
        (None, None) => None,
        (Some(WebAddress::Localised(master)), None) => Some(WebAddress::Localised(master)),
        (None, Some(WebAddress::Localised(merger))) => Some(WebAddress::Localised(merger)),
        (Some(WebAddress::Localised(master)), Some(WebAddress::Localised(merger))) => {
            merge_attribute(Some(master), Some(merger)).map(WebAddress::Localised)
        }
        (master, merger) => {
            tracing::warn!(
                ?master,
                ?merger,
                "Cannot merge a plain web address, dropping the value"
            );
            None
        }
    }
}

/// Merge the multilingual attributes of two offices into `master`.
pub fn merge_office(master: &mut OfficeRecord, merger: OfficeRecord) {
    master.name = merge_attribute(master.name.take(), merger.name);
    master.office_at_web = merge_web_address(master.office_at_web.take(), merger.office_at_web);
}

/// Merge the titles of two document types into `master`.
pub fn merge_document_type(master: &mut DocumentTypeRecord, merger: DocumentTypeRecord) {
    master.title = merge_attribute(master.title.take(), merger.title);
}

/// Merge a language variant of a document into `master`.
///
/// Multilingual attributes are unioned. The law status is not merged: the
/// merger's status replaces the master's.
pub fn merge_document(master: &mut DocumentRecord, merger: DocumentRecord) {
    merge_document_type(&mut master.document_type, merger.document_type);
    master.law_status = merger.law_status;
    merge_office(&mut master.responsible_office, merger.responsible_office);
    master.title = merge_attribute(master.title.take(), merger.title);
    master.text_at_web = merge_attribute(master.text_at_web.take(), merger.text_at_web);
    master.abbreviation = merge_attribute(master.abbreviation.take(), merger.abbreviation);
    master.official_number =
        merge_attribute(master.official_number.take(), merger.official_number);
}

/// Rewrite plain office web addresses into single-language maps.
///
/// Must run on every read before merging so that all office addresses are
/// localised.
pub fn make_office_at_web_multilingual(records: &mut [DocumentRecord], language: &str) {
    for record in records {
        let office_at_web = &mut record.responsible_office.office_at_web;
        if let Some(WebAddress::Plain(url)) = office_at_web {
            *office_at_web = Some(WebAddress::Localised(localised(language, url.as_str())));
        }
    }
}

/// Merge the records of another language into the master records.
///
/// Records are matched by [`SourceKey`]. Merger records without a master
/// counterpart are logged and ignored; master records without a merger stay
/// as they are.
pub fn merge_language_variants(master: &mut [DocumentRecord], mergers: Vec<DocumentRecord>) {
    let positions: HashMap<SourceKey, usize> = master
        .iter()
        .enumerate()
        .map(|(position, record)| (record.source_key.clone(), position))
        .collect();

    for merger in mergers {
        match positions.get(&merger.source_key) {
            Some(&position) => merge_document(&mut master[position], merger),
            None => tracing::warn!(
                document_id = %merger.source_key.document_id,
                file_index = merger.source_key.file_index,
                "No master record for language variant, ignoring it"
            ),
        }
    }
}
