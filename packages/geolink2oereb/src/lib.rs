//! geolink2oereb - Transform ÖREBlex geoLinks into OeREBKRMtrsfr_V2_0 entities.
//!
//! This crate downloads the legal document metadata of ÖREBlex geoLink
//! collections in every configured language, merges the language variants
//! and translates the result into `Dokument` and `Amt` entities of the
//! `OeREBKRMtrsfr_V2_0` transfer model.
//!
//! # Example
//!
//! ```
//! use geolink2oereb::merge::merge_attribute;
//! use geolink2oereb::oerebkrmtrsfr::fix_url;
//! use geolink2oereb::types::localised;
//!
//! let merged = merge_attribute(Some(localised("de", "Titel")), Some(localised("fr", "Titre")));
//! assert_eq!(merged.map(|m| m.len()), Some(2));
//! assert_eq!(fix_url("www.are.gr.ch"), "https://www.are.gr.ch");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and the `pyramid_oereb` settings file
//! - [`types`]: Document, office, type and law status records
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for the ÖREBlex host
//! - [`xml`]: XML utilities
//! - [`geolink`]: geoLink XML parsing
//! - [`source`]: Registry access and record strategies
//! - [`merge`]: Merging of language variants
//! - [`loader`]: Multilingual loading of a collection
//! - [`oerebkrmtrsfr`]: Transfer model entities and XML rendering
//! - [`transform`]: Conversion entry points, deduplication and UUIDs
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod geolink;
pub mod http;
pub mod loader;
pub mod merge;
pub mod oerebkrmtrsfr;
pub mod source;
pub mod transform;
pub mod types;
pub mod xml;

// Re-export main functions
pub use transform::{assign_uuids, run, run_batch, run_with, unify_gathered, RunOptions};

// Re-export commonly used items
pub use config::Settings;
pub use error::{ConversionError, Result};
pub use source::{DocumentRegistry, OereblexSource, SourceKind};
pub use types::{DocumentRecord, LawStatusRecord, OfficeRecord, WebAddress};
