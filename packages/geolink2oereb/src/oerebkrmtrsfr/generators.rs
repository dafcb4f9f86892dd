//! Translation of document records into transfer model entities.

use std::fmt::Debug;

use sha2::{Digest, Sha256};

use super::model::{
    Amt, Dokument, DokumentTyp, LocalisedText, LocalisedTextList, LocalisedUri, LocalisedUriList,
    MultilingualText, MultilingualTextBody, MultilingualUri, MultilingualUriBody, RechtsStatus,
    ZustaendigeStelle,
};
use crate::types::{self, DocumentRecord, OfficeRecord, WebAddress};

/// Prefix URLs lacking a scheme with `https://`.
///
/// ÖREBlex often delivers authority URLs like `www.example.ch`, which are
/// not valid INTERLIS URIs.
///
/// # Examples
/// ```
/// use geolink2oereb::oerebkrmtrsfr::fix_url;
///
/// assert_eq!(fix_url("test.ch"), "https://test.ch");
/// assert_eq!(fix_url("http://test.ch"), "http://test.ch");
/// ```
#[must_use]
pub fn fix_url(url: &str) -> String {
    if url.starts_with("http") {
        return url.to_string();
    }
    let fixed = format!("https://{url}");
    tracing::info!(from = url, to = %fixed, "Fixing url");
    fixed
}

/// Build a multilingual text element from a language map.
#[must_use]
pub fn multilingual_text(text: &types::LocalisedText) -> MultilingualText {
    let entries = text
        .iter()
        .map(|(language, text)| LocalisedText {
            language: language.clone(),
            text: text.clone(),
        })
        .collect();
    MultilingualText {
        multilingual_text: MultilingualTextBody {
            localised_text: LocalisedTextList { entries },
        },
    }
}

/// Build a multilingual URI element from a language map, fixing each URL.
#[must_use]
pub fn multilingual_uri(uri: &types::LocalisedText) -> MultilingualUri {
    let entries = uri
        .iter()
        .map(|(language, url)| LocalisedUri {
            language: language.clone(),
            text: fix_url(url),
        })
        .collect();
    MultilingualUri {
        multilingual_uri: MultilingualUriBody {
            localised_text: LocalisedUriList { entries },
        },
    }
}

/// Transient identifier derived from an entity's content.
fn content_id(entity: &impl Debug) -> String {
    let digest = Sha256::digest(format!("{entity:?}").as_bytes());
    hex::encode(digest)
}

/// Translate an office record into an `Amt`.
///
/// The `Amt` gets a transient TID derived from its content, so equal offices
/// share it.
#[must_use]
pub fn office_record_to_amt(office: &OfficeRecord) -> Amt {
    let amt_im_web = match &office.office_at_web {
        Some(WebAddress::Localised(map)) => Some(multilingual_uri(map)),
        Some(WebAddress::Plain(url)) => {
            tracing::warn!(url, "Dropping office web address without language");
            None
        }
        None => None,
    };

    let mut amt = Amt {
        tid: String::new(),
        name: office.name.as_ref().map(multilingual_text),
        amt_im_web,
        uid: office.uid.clone(),
        zeile1: office.line1.clone(),
        zeile2: office.line2.clone(),
        strasse: office.street.clone(),
        hausnr: office.number.clone(),
        plz: office.postal_code,
        ort: office.city.clone(),
    };
    amt.tid = content_id(&amt);
    amt
}

/// Translate a document record into a `Dokument` and its responsible `Amt`.
///
/// The `Dokument` references the `Amt` by the Amt's transient TID and gets a
/// transient TID derived from its own content.
#[must_use]
pub fn document_record_to_dokument(record: &DocumentRecord) -> (Dokument, Amt) {
    let amt = office_record_to_amt(&record.responsible_office);

    let mut dokument = Dokument {
        tid: String::new(),
        typ: record
            .document_type
            .code
            .as_deref()
            .and_then(DokumentTyp::from_code),
        titel: record.title.as_ref().map(multilingual_text),
        abkuerzung: record.abbreviation.as_ref().map(multilingual_text),
        offizielle_nr: record.official_number.as_ref().map(multilingual_text),
        nur_in_gemeinde: record.only_in_municipality,
        text_im_web: record.text_at_web.as_ref().map(multilingual_uri),
        auszug_index: record.index,
        rechtsstatus: record
            .law_status
            .code
            .as_deref()
            .and_then(RechtsStatus::from_code),
        publiziert_ab: record.published_from,
        publiziert_bis: record.published_until,
        zustaendige_stelle: ZustaendigeStelle {
            reference: amt.tid.clone(),
        },
    };
    dokument.tid = content_id(&dokument);

    (dokument, amt)
}
