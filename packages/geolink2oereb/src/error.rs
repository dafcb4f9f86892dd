//! Error types for geolink2oereb.
//!
//! Failures from the registry, the configuration file and the XML layers are
//! propagated unchanged inside [`ConversionError`]; nothing is retried.

use thiserror::Error;

/// Main error type for the conversion library.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the geoLink XML of a collection.
    #[error("Failed to download geoLink {geolink_id} ({language}): {source}")]
    GeolinkDownload {
        geolink_id: u64,
        language: String,
        #[source]
        source: reqwest::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The geoLink response has an unexpected structure.
    #[error("Unexpected geoLink structure: {0}")]
    InvalidGeolink(String),

    /// A mandatory attribute of a registry document is missing.
    #[error("Missing {attribute} for document #{document_id}")]
    MissingAttribute {
        attribute: &'static str,
        document_id: String,
    },

    /// A geoLink doctype has no entry in the theme's document type lookup.
    #[error("No document type lookup for data code '{data_code}' in theme {theme_code}")]
    UnknownDocumentType {
        theme_code: String,
        data_code: String,
    },

    /// Configuration file could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested theme is not configured.
    #[error("Theme '{0}' is not configured")]
    UnknownTheme(String),

    /// XML serialization failed.
    #[error("XML serialization failed: {0}")]
    XmlSerialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
