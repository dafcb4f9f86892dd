//! Multilingual loading of a geoLink collection.

use crate::config::{Settings, ThemeConfig};
use crate::error::Result;
use crate::merge::{make_office_at_web_multilingual, merge_language_variants};
use crate::oerebkrmtrsfr::{DokumentTyp, RechtsStatus};
use crate::source::DocumentRegistry;
use crate::types::{DocumentRecord, LawStatusRecord};

/// Load all records of a geoLink collection in every configured language.
///
/// The master language is read first. Every further language is read,
/// normalised and merged into the master records. Finally the document type
/// and law status codes are translated from extract codes to transfer codes
/// using the theme's lookups.
///
/// # Arguments
/// * `registry` - Source of the records
/// * `settings` - Loaded configuration
/// * `theme_code` - Theme whose lookups apply
/// * `geolink_id` - Collection identifier
pub fn load<R: DocumentRegistry + ?Sized>(
    registry: &R,
    settings: &Settings,
    theme_code: &str,
    geolink_id: u64,
) -> Result<Vec<DocumentRecord>> {
    let theme = settings.theme(theme_code)?;
    let law_status = LawStatusRecord::in_force();

    let master_language = settings.master_language();
    let mut records = registry.read(master_language, geolink_id, &law_status)?;
    make_office_at_web_multilingual(&mut records, master_language);

    for language in settings.languages().iter().skip(1) {
        let mut mergers = registry.read(language, geolink_id, &law_status)?;
        make_office_at_web_multilingual(&mut mergers, language);
        merge_language_variants(&mut records, mergers);
    }

    for record in &mut records {
        translate_codes(record, theme);
    }

    tracing::info!(geolink_id, records = records.len(), "Loaded geoLink");
    Ok(records)
}

/// Replace extract codes with transfer codes.
fn translate_codes(record: &mut DocumentRecord, theme: &ThemeConfig) {
    if let Some(code) = record.document_type.code.take() {
        let transfer_code = defined_code(
            theme.document_type_transfer_code(&code),
            DokumentTyp::from_code,
            "Typ",
        );
        tracing::debug!(extract_code = %code, ?transfer_code, "Translated document type");
        record.document_type.code = transfer_code;
    }
    if let Some(code) = record.law_status.code.take() {
        let transfer_code = defined_code(
            theme.law_status_transfer_code(&code),
            RechtsStatus::from_code,
            "Rechtsstatus",
        );
        tracing::debug!(extract_code = %code, ?transfer_code, "Translated law status");
        record.law_status.code = transfer_code;
    }
}

/// Keep a transfer code only if the transfer model defines it.
fn defined_code<T>(
    transfer_code: Option<String>,
    parse: fn(&str) -> Option<T>,
    attribute: &str,
) -> Option<String> {
    let transfer_code = transfer_code?;
    if parse(&transfer_code).is_none() {
        tracing::warn!(
            transfer_code = %transfer_code,
            attribute,
            "Transfer code not defined by OeREBKRMtrsfr_V2_0, leaving it unset"
        );
        return None;
    }
    Some(transfer_code)
}
