//! `OeREBKRMtrsfr_V2_0` transfer model: entities, translation from document
//! records and XML rendering.

pub mod generators;
pub mod model;
pub mod writer;

pub use generators::{
    document_record_to_dokument, fix_url, multilingual_text, multilingual_uri,
    office_record_to_amt,
};
pub use model::{Amt, Dokument, DokumentTyp, RechtsStatus};
pub use writer::{render_amt, render_dokument, render_gathered, render_unified};
