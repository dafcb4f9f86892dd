//! Entities of the `OeREBKRMtrsfr_V2_0` transfer model.
//!
//! Field names follow the INTERLIS XML encoding so the structs serialize
//! directly into transfer file elements.

use chrono::NaiveDate;
use serde::Serialize;

/// Element name of a document.
pub const DOKUMENT_TAG: &str = "OeREBKRM_V2_0.Dokumente.Dokument";

/// Element name of an office.
pub const AMT_TAG: &str = "OeREBKRM_V2_0.Amt.Amt";

/// `OeREBKRM_V2_0.DokumentTyp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DokumentTyp {
    Rechtsvorschrift,
    GesetzlicheGrundlage,
    Hinweis,
}

impl DokumentTyp {
    /// Parse a transfer code, `None` if the model does not know it.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Rechtsvorschrift" => Some(Self::Rechtsvorschrift),
            "GesetzlicheGrundlage" => Some(Self::GesetzlicheGrundlage),
            "Hinweis" => Some(Self::Hinweis),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rechtsvorschrift => "Rechtsvorschrift",
            Self::GesetzlicheGrundlage => "GesetzlicheGrundlage",
            Self::Hinweis => "Hinweis",
        }
    }
}

/// `OeREBKRM_V2_0.RechtsStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RechtsStatus {
    #[serde(rename = "inKraft")]
    InKraft,

    AenderungMitVorwirkung,

    AenderungOhneVorwirkung,
}

impl RechtsStatus {
    /// Parse a transfer code, `None` if the model does not know it.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "inKraft" => Some(Self::InKraft),
            "AenderungMitVorwirkung" => Some(Self::AenderungMitVorwirkung),
            "AenderungOhneVorwirkung" => Some(Self::AenderungOhneVorwirkung),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InKraft => "inKraft",
            Self::AenderungMitVorwirkung => "AenderungMitVorwirkung",
            Self::AenderungOhneVorwirkung => "AenderungOhneVorwirkung",
        }
    }
}

/// One language entry of a multilingual text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalisedText {
    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "Text")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalisedTextList {
    #[serde(rename = "LocalisationCH_V1.LocalisedText")]
    pub entries: Vec<LocalisedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultilingualTextBody {
    #[serde(rename = "LocalisedText")]
    pub localised_text: LocalisedTextList,
}

/// `LocalisationCH_V1.MultilingualText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultilingualText {
    #[serde(rename = "LocalisationCH_V1.MultilingualText")]
    pub multilingual_text: MultilingualTextBody,
}

impl MultilingualText {
    /// Entries in output order.
    #[must_use]
    pub fn entries(&self) -> &[LocalisedText] {
        &self.multilingual_text.localised_text.entries
    }
}

/// One language entry of a multilingual URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalisedUri {
    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "Text")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalisedUriList {
    #[serde(rename = "OeREBKRM_V2_0.LocalisedUri")]
    pub entries: Vec<LocalisedUri>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultilingualUriBody {
    #[serde(rename = "LocalisedText")]
    pub localised_text: LocalisedUriList,
}

/// `OeREBKRM_V2_0.MultilingualUri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultilingualUri {
    #[serde(rename = "OeREBKRM_V2_0.MultilingualUri")]
    pub multilingual_uri: MultilingualUriBody,
}

impl MultilingualUri {
    /// Entries in output order.
    #[must_use]
    pub fn entries(&self) -> &[LocalisedUri] {
        &self.multilingual_uri.localised_text.entries
    }
}

/// Reference from a document to its responsible office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZustaendigeStelle {
    #[serde(rename = "@REF")]
    pub reference: String,
}

/// `OeREBKRM_V2_0.Amt.Amt`: a responsible office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amt {
    /// Transaction id. Content derived until UUIDs are assigned.
    #[serde(rename = "@TID")]
    pub tid: String,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualText>,

    #[serde(rename = "AmtImWeb", skip_serializing_if = "Option::is_none")]
    pub amt_im_web: Option<MultilingualUri>,

    #[serde(rename = "UID", skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(rename = "Zeile1", skip_serializing_if = "Option::is_none")]
    pub zeile1: Option<String>,

    #[serde(rename = "Zeile2", skip_serializing_if = "Option::is_none")]
    pub zeile2: Option<String>,

    #[serde(rename = "Strasse", skip_serializing_if = "Option::is_none")]
    pub strasse: Option<String>,

    #[serde(rename = "Hausnr", skip_serializing_if = "Option::is_none")]
    pub hausnr: Option<String>,

    #[serde(rename = "PLZ", skip_serializing_if = "Option::is_none")]
    pub plz: Option<u32>,

    #[serde(rename = "Ort", skip_serializing_if = "Option::is_none")]
    pub ort: Option<String>,
}

/// `OeREBKRM_V2_0.Dokumente.Dokument`: a legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dokument {
    /// Transaction id. Content derived until UUIDs are assigned.
    #[serde(rename = "@TID")]
    pub tid: String,

    #[serde(rename = "Typ", skip_serializing_if = "Option::is_none")]
    pub typ: Option<DokumentTyp>,

    #[serde(rename = "Titel", skip_serializing_if = "Option::is_none")]
    pub titel: Option<MultilingualText>,

    #[serde(rename = "Abkuerzung", skip_serializing_if = "Option::is_none")]
    pub abkuerzung: Option<MultilingualText>,

    #[serde(rename = "OffizielleNr", skip_serializing_if = "Option::is_none")]
    pub offizielle_nr: Option<MultilingualText>,

    /// BFS number of the only municipality the document applies to.
    #[serde(rename = "NurInGemeinde", skip_serializing_if = "Option::is_none")]
    pub nur_in_gemeinde: Option<u32>,

    #[serde(rename = "TextImWeb", skip_serializing_if = "Option::is_none")]
    pub text_im_web: Option<MultilingualUri>,

    #[serde(rename = "AuszugIndex", skip_serializing_if = "Option::is_none")]
    pub auszug_index: Option<i32>,

    #[serde(rename = "Rechtsstatus", skip_serializing_if = "Option::is_none")]
    pub rechtsstatus: Option<RechtsStatus>,

    #[serde(rename = "publiziertAb")]
    pub publiziert_ab: NaiveDate,

    #[serde(rename = "publiziertBis", skip_serializing_if = "Option::is_none")]
    pub publiziert_bis: Option<NaiveDate>,

    #[serde(rename = "ZustaendigeStelle")]
    pub zustaendige_stelle: ZustaendigeStelle,
}
