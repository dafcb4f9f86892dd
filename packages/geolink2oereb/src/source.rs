//! ÖREBlex document source.
//!
//! [`OereblexSource`] downloads the geoLink XML of a collection for one
//! language and turns its documents into [`DocumentRecord`]s. How titles are
//! built and which documents are kept is decided by a [`RecordStrategy`],
//! selected by [`SourceKind`] when the source is created.

use chrono::NaiveDate;
use clap::ValueEnum;
use reqwest::blocking::Client;

use crate::config::{OereblexConfig, Settings, ThemeConfig};
use crate::error::{ConversionError, Result};
use crate::geolink::{parse_geolinks, GeolinkDocument, GeolinkFile};
use crate::http::{bytes_to_string, create_client, download_bytes};
use crate::types::{
    localised, DocumentRecord, DocumentTypeRecord, LawStatusRecord, LocalisedText, OfficeRecord,
    SourceKey, WebAddress,
};

/// Enactment date given to notices that have none.
const NOTICE_DEFAULT_ENACTMENT: (i32, u32, u32) = (1970, 1, 1);

/// Authority given to notices that have none.
const NOTICE_DEFAULT_AUTHORITY: &str = "-";

/// Federal levels of documents published by the federation.
///
/// Federal documents are added to the extract from the official federal
/// transfer files, so the custom strategy drops them.
pub const FEDERAL_LEVELS: [&str; 5] = [
    "Bund",
    "Confédération",
    "Cancelleria federale",
    "Confederaziun",
    "Confederazione",
];

/// Access to a legal document registry.
pub trait DocumentRegistry {
    /// Read all records of a geoLink collection in one language.
    ///
    /// # Arguments
    /// * `language` - Language of the read
    /// * `geolink_id` - Collection identifier
    /// * `law_status` - Law status given to every record
    fn read(
        &self,
        language: &str,
        geolink_id: u64,
        law_status: &LawStatusRecord,
    ) -> Result<Vec<DocumentRecord>>;
}

/// Decides how registry documents become records.
pub trait RecordStrategy {
    /// Title of the record built for `file` of `document`.
    fn document_title(
        &self,
        document: &GeolinkDocument,
        file: &GeolinkFile,
        language: &str,
    ) -> LocalisedText;

    /// Whether records should be built for `document` at all.
    fn accepts(&self, _document: &GeolinkDocument) -> bool {
        true
    }
}

/// Titles records by their file, keeps every document.
pub struct FileTitleStrategy;

impl RecordStrategy for FileTitleStrategy {
    fn document_title(
        &self,
        document: &GeolinkDocument,
        file: &GeolinkFile,
        language: &str,
    ) -> LocalisedText {
        let title = file
            .title
            .as_deref()
            .or(document.title.as_deref())
            .unwrap_or_default();
        localised(language, title)
    }
}

/// Titles records by their document and drops federal documents.
///
/// Decrees get the file title appended in parentheses, since one decree
/// usually has several files.
pub struct DocumentTitleStrategy;

impl RecordStrategy for DocumentTitleStrategy {
    fn document_title(
        &self,
        document: &GeolinkDocument,
        file: &GeolinkFile,
        language: &str,
    ) -> LocalisedText {
        let title = document.title.clone().unwrap_or_default();
        let title = match (document.is_doctype("decree"), file.title.as_deref()) {
            (true, Some(file_title)) => format!("{title} ({file_title})"),
            _ => title,
        };
        localised(language, title)
    }

    fn accepts(&self, document: &GeolinkDocument) -> bool {
        match document.federal_level.as_deref() {
            Some(level) if FEDERAL_LEVELS.contains(&level) => {
                tracing::info!(
                    document_id = %document.id,
                    federal_level = level,
                    "Filtering federal document"
                );
                false
            }
            _ => true,
        }
    }
}

/// Registered record strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// File titles, all documents.
    Standard,

    /// Document titles, federal documents filtered out.
    #[default]
    Custom,
}

impl SourceKind {
    /// Resolve the strategy registered under this kind.
    #[must_use]
    pub fn strategy(self) -> Box<dyn RecordStrategy> {
        match self {
            Self::Standard => Box::new(FileTitleStrategy),
            Self::Custom => Box::new(DocumentTitleStrategy),
        }
    }
}

/// Build the geoLink URL of a collection.
///
/// # Examples
/// ```
/// use geolink2oereb::config::Settings;
/// use geolink2oereb::source::geolink_url;
///
/// let yaml = "pyramid_oereb:\n  language: [de]\n  oereblex:\n    host: https://oereblex.gr.ch/\n";
/// let settings = Settings::from_yaml(yaml, "pyramid_oereb", false).unwrap();
/// assert_eq!(
///     geolink_url(&settings.oereblex, "ch.Planungszonen", 4304, "de"),
///     "https://oereblex.gr.ch/api/geolinks/4304.xml?locale=de"
/// );
/// ```
pub fn geolink_url(
    config: &OereblexConfig,
    theme_code: &str,
    geolink_id: u64,
    language: &str,
) -> String {
    let host = config.host.trim_end_matches('/');
    let mut url = format!("{host}/api/geolinks/{geolink_id}.xml?locale={language}");

    if config.pass_version {
        if let Some(version) = &config.version {
            url.push_str("&version=");
            url.push_str(version);
        }
    }

    if let Some(param) = config.url_param(theme_code) {
        url.push('&');
        url.push_str(param);
    }

    url
}

/// Document source reading from an ÖREBlex host.
pub struct OereblexSource {
    client: Client,
    config: OereblexConfig,
    theme: ThemeConfig,
    strategy: Box<dyn RecordStrategy>,
}

impl OereblexSource {
    /// Create a source for one theme.
    pub fn new(settings: &Settings, theme_code: &str, kind: SourceKind) -> Result<Self> {
        let theme = settings.theme(theme_code)?.clone();
        let client = create_client(&settings.oereblex)?;
        if settings.oereblex.validation {
            tracing::debug!("Schema validation is not performed; only the structure is checked");
        }
        Ok(Self {
            client,
            config: settings.oereblex.clone(),
            theme,
            strategy: kind.strategy(),
        })
    }

    /// Whether a document is a main document for this source.
    fn is_main(&self, document: &GeolinkDocument) -> bool {
        document.category.as_deref() == Some("main")
            || (self.config.related_decree_as_main && document.is_doctype("decree"))
            || (self.config.related_notice_as_main && document.is_doctype("notice"))
    }

    /// Convert downloaded geoLink documents into records.
    pub fn records_from_documents(
        &self,
        documents: &[GeolinkDocument],
        language: &str,
        law_status: &LawStatusRecord,
    ) -> Result<Vec<DocumentRecord>> {
        let mut records = Vec::new();
        for document in documents {
            if !self.is_main(document) || !self.strategy.accepts(document) {
                continue;
            }
            records.extend(self.document_records(document, language, law_status)?);
        }
        Ok(records)
    }

    /// Build one record per file of a document.
    fn document_records(
        &self,
        document: &GeolinkDocument,
        language: &str,
        law_status: &LawStatusRecord,
    ) -> Result<Vec<DocumentRecord>> {
        if document.files.is_empty() {
            tracing::warn!(document_id = %document.id, "Skipping document without files");
            return Ok(Vec::new());
        }

        let mut enactment_date = document.enactment_date;
        let mut authority = document.authority.clone();
        if document.is_doctype("notice") {
            let (year, month, day) = NOTICE_DEFAULT_ENACTMENT;
            enactment_date = enactment_date.or(NaiveDate::from_ymd_opt(year, month, day));
            authority = authority.or_else(|| Some(NOTICE_DEFAULT_AUTHORITY.to_string()));
        }

        let Some(published_from) = enactment_date else {
            tracing::warn!(document_id = %document.id, "Skipping document without enactment date");
            return Ok(Vec::new());
        };

        if document.title.is_none() {
            return Err(ConversionError::MissingAttribute {
                attribute: "title",
                document_id: document.id.clone(),
            });
        }
        let authority = authority.ok_or_else(|| ConversionError::MissingAttribute {
            attribute: "authority",
            document_id: document.id.clone(),
        })?;

        let document_type = self.document_type(document)?;

        let mut office = OfficeRecord::new(localised(language, authority));
        office.office_at_web = document.authority_url.clone().map(WebAddress::Plain);

        let official_number = self.mapped_attribute(
            document,
            self.config.mapping.official_number.as_deref(),
            language,
        );
        let abbreviation =
            self.mapped_attribute(document, self.config.mapping.abbreviation.as_deref(), language);

        let records = document
            .files
            .iter()
            .enumerate()
            .map(|(file_index, file)| DocumentRecord {
                source_key: SourceKey::new(document.id.clone(), file_index),
                document_type: document_type.clone(),
                index: document.index,
                law_status: law_status.clone(),
                title: Some(self.strategy.document_title(document, file, language)),
                responsible_office: office.clone(),
                published_from,
                published_until: document.abrogation_date,
                text_at_web: Some(localised(language, self.file_url(&file.href))),
                abbreviation: abbreviation.clone(),
                official_number: official_number.clone(),
                only_in_municipality: None,
            })
            .collect();

        Ok(records)
    }

    /// Document type carrying the extract code of the geoLink doctype.
    fn document_type(&self, document: &GeolinkDocument) -> Result<DocumentTypeRecord> {
        let data_code = document.doctype.as_deref().unwrap_or_default();
        let extract_code = self
            .theme
            .document_type_extract_code(data_code)
            .ok_or_else(|| ConversionError::UnknownDocumentType {
                theme_code: self.theme.code.clone(),
                data_code: data_code.to_string(),
            })?;
        Ok(DocumentTypeRecord::new(extract_code, None))
    }

    fn mapped_attribute(
        &self,
        document: &GeolinkDocument,
        attribute: Option<&str>,
        language: &str,
    ) -> Option<LocalisedText> {
        attribute
            .and_then(|name| document.text_attribute(name))
            .map(|value| localised(language, value))
    }

    /// Resolve attachment links relative to the host.
    fn file_url(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{href}", self.config.host.trim_end_matches('/'))
        } else {
            href.to_string()
        }
    }
}

impl DocumentRegistry for OereblexSource {
    fn read(
        &self,
        language: &str,
        geolink_id: u64,
        law_status: &LawStatusRecord,
    ) -> Result<Vec<DocumentRecord>> {
        let url = geolink_url(&self.config, &self.theme.code, geolink_id, language);
        tracing::info!(geolink_id, language, "Reading geoLink");

        let bytes = download_bytes(&self.client, &url, self.config.auth.as_ref()).map_err(|e| {
            if let ConversionError::Http(source) = e {
                ConversionError::GeolinkDownload {
                    geolink_id,
                    language: language.to_string(),
                    source,
                }
            } else {
                e
            }
        })?;

        let xml = bytes_to_string(&bytes, &format!("geoLink {geolink_id}"));
        let documents = parse_geolinks(&xml)?;
        let records = self.records_from_documents(&documents, language, law_status)?;
        tracing::debug!(
            geolink_id,
            language,
            documents = documents.len(),
            records = records.len(),
            "Read geoLink"
        );
        Ok(records)
    }
}
