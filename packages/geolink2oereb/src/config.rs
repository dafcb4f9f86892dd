//! Configuration constants and the `pyramid_oereb` settings file.
//!
//! The settings are read once from a `pyramid_oereb` style YAML file and
//! handed to every stage explicitly. Only the parts needed for the ÖREBlex
//! conversion are modelled; unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::error::{ConversionError, Result};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Section of the YAML file holding the `pyramid_oereb` configuration.
pub const DEFAULT_SECTION: &str = "pyramid_oereb";

/// Top-level key wrapping the section in c2ctemplate style files.
pub const C2CTEMPLATE_VARS_KEY: &str = "vars";

/// Extract code of the law status passed to every registry read.
pub const DEFAULT_LAW_STATUS_CODE: &str = "inForce";

/// One row of a code lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeLookup {
    /// Code used in the source data (e.g. the ÖREBlex doctype).
    #[serde(default)]
    pub data_code: Option<String>,

    /// Code used in the OeREBKRMtrsfr transfer model.
    pub transfer_code: String,

    /// Code used in the extract.
    pub extract_code: String,
}

/// Settings of one theme (a `plrs` entry).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeConfig {
    pub code: String,

    #[serde(default)]
    pub law_status_lookup: Vec<CodeLookup>,

    #[serde(default)]
    pub document_types_lookup: Vec<CodeLookup>,
}

impl ThemeConfig {
    /// Extract code for a document type data code (e.g. "decree").
    #[must_use]
    pub fn document_type_extract_code(&self, data_code: &str) -> Option<&str> {
        self.document_types_lookup
            .iter()
            .find(|lookup| lookup.data_code.as_deref() == Some(data_code))
            .map(|lookup| lookup.extract_code.as_str())
    }

    /// Transfer code for a document type extract code, `None` if unmatched.
    #[must_use]
    pub fn document_type_transfer_code(&self, extract_code: &str) -> Option<String> {
        transfer_code(&self.document_types_lookup, extract_code)
    }

    /// Transfer code for a law status extract code, `None` if unmatched.
    #[must_use]
    pub fn law_status_transfer_code(&self, extract_code: &str) -> Option<String> {
        transfer_code(&self.law_status_lookup, extract_code)
    }
}

fn transfer_code(lookups: &[CodeLookup], extract_code: &str) -> Option<String> {
    lookups
        .iter()
        .find(|lookup| lookup.extract_code == extract_code)
        .map(|lookup| lookup.transfer_code.clone())
}

/// Names of the ÖREBlex document attributes copied into optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttributeMapping {
    #[serde(default)]
    pub official_number: Option<String>,

    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// Proxy URLs per scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub http: Option<String>,

    #[serde(default)]
    pub https: Option<String>,
}

/// Basic authentication credentials for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Extra query parameter appended for a theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlParam {
    pub code: String,
    pub url_param: String,
}

/// Access settings of the ÖREBlex registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OereblexConfig {
    pub host: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub pass_version: bool,

    #[serde(default)]
    pub validation: bool,

    #[serde(default)]
    pub mapping: AttributeMapping,

    #[serde(default)]
    pub related_decree_as_main: bool,

    #[serde(default)]
    pub related_notice_as_main: bool,

    #[serde(default)]
    pub proxy: Option<ProxyConfig>,

    #[serde(default)]
    pub auth: Option<AuthConfig>,

    #[serde(default)]
    pub url_param_config: Vec<UrlParam>,
}

impl OereblexConfig {
    /// Extra URL parameter configured for a theme.
    #[must_use]
    pub fn url_param(&self, theme_code: &str) -> Option<&str> {
        self.url_param_config
            .iter()
            .find(|param| param.code == theme_code)
            .map(|param| param.url_param.as_str())
    }
}

/// The `pyramid_oereb` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Supported languages; the first one is the master language.
    pub language: Vec<String>,

    #[serde(default)]
    pub default_language: Option<String>,

    pub oereblex: OereblexConfig,

    #[serde(default)]
    pub plrs: Vec<ThemeConfig>,
}

impl Settings {
    /// Load and validate the settings from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    /// * `section` - Key of the section holding the configuration
    /// * `c2ctemplate_style` - Whether the section is nested below `vars`
    pub fn load(path: &Path, section: &str, c2ctemplate_style: bool) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_yaml(&content, section, c2ctemplate_style)?;
        tracing::debug!(
            path = %path.display(),
            section,
            languages = ?settings.language,
            themes = settings.plrs.len(),
            "Loaded configuration"
        );
        Ok(settings)
    }

    /// Parse and validate the settings from YAML text.
    pub fn from_yaml(content: &str, section: &str, c2ctemplate_style: bool) -> Result<Self> {
        let root: Value = serde_yaml_ng::from_str(content)?;

        let scope = if c2ctemplate_style {
            root.get(C2CTEMPLATE_VARS_KEY).ok_or_else(|| {
                ConversionError::Config(format!(
                    "c2ctemplate style file has no '{C2CTEMPLATE_VARS_KEY}' key"
                ))
            })?
        } else {
            &root
        };

        let section_value = scope
            .get(section)
            .ok_or_else(|| ConversionError::Config(format!("section '{section}' not found")))?;

        let settings: Settings = serde_yaml_ng::from_value(section_value.clone())?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(ConversionError::Config(
                "at least one language must be configured".to_string(),
            ));
        }
        if let Some(default_language) = &self.default_language {
            if !self.language.contains(default_language) {
                return Err(ConversionError::Config(format!(
                    "default_language '{default_language}' is not one of {:?}",
                    self.language
                )));
            }
        }
        if self.oereblex.host.trim().is_empty() {
            return Err(ConversionError::Config(
                "oereblex.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured languages in order; the first one is the master language.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.language
    }

    /// Master language used for the first registry read.
    #[must_use]
    pub fn master_language(&self) -> &str {
        // validate() guarantees at least one language
        self.language.first().map(String::as_str).unwrap_or_default()
    }

    /// Theme configuration by code.
    pub fn theme(&self, theme_code: &str) -> Result<&ThemeConfig> {
        self.plrs
            .iter()
            .find(|theme| theme.code == theme_code)
            .ok_or_else(|| ConversionError::UnknownTheme(theme_code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
pyramid_oereb:
  language: [de, it, rm]
  default_language: de
  srid: 2056
  oereblex:
    host: https://oereblex.gr.ch
    version: 1.2.2
    pass_version: true
    validation: true
    language: de
    canton: GR
    mapping:
      official_number: number
      abbreviation: abbreviation
    related_decree_as_main: false
    related_notice_as_main: false
    proxy: null
    url_param_config:
      - code: ch.StatischeWaldgrenzen
        url_param: oereb_id=24
  plrs:
    - code: ch.Planungszonen
      geometry_type: GEOMETRYCOLLECTION
      law_status_lookup:
        - data_code: inKraft
          transfer_code: inKraft
          extract_code: inForce
        - data_code: AenderungMitVorwirkung
          transfer_code: AenderungMitVorwirkung
          extract_code: changeWithPreEffect
        - data_code: AenderungOhneVorwirkung
          transfer_code: AenderungOhneVorwirkung
          extract_code: changeWithoutPreEffect
      document_types_lookup:
        - data_code: decree
          transfer_code: Rechtsvorschrift
          extract_code: LegalProvision
        - data_code: edict
          transfer_code: GesetzlicheGrundlage
          extract_code: Law
        - data_code: notice
          transfer_code: Hinweis
          extract_code: Hint
"#;

    fn sample_settings() -> Settings {
        Settings::from_yaml(SAMPLE_CONFIG, DEFAULT_SECTION, false).unwrap()
    }

    #[test]
    fn test_load_sample_config() {
        let settings = sample_settings();
        assert_eq!(settings.languages(), ["de", "it", "rm"]);
        assert_eq!(settings.master_language(), "de");
        assert_eq!(settings.oereblex.host, "https://oereblex.gr.ch");
        assert_eq!(settings.oereblex.version.as_deref(), Some("1.2.2"));
        assert!(settings.oereblex.pass_version);
        assert_eq!(
            settings.oereblex.mapping.official_number.as_deref(),
            Some("number")
        );
        assert!(settings.oereblex.proxy.is_none());
    }

    #[test]
    fn test_document_type_transfer_codes() {
        let settings = sample_settings();
        let theme = settings.theme("ch.Planungszonen").unwrap();
        for (extract, transfer) in [
            ("LegalProvision", Some("Rechtsvorschrift")),
            ("Law", Some("GesetzlicheGrundlage")),
            ("Hint", Some("Hinweis")),
            ("NotConfigured", None),
        ] {
            assert_eq!(
                theme.document_type_transfer_code(extract).as_deref(),
                transfer
            );
        }
    }

    #[test]
    fn test_law_status_transfer_codes() {
        let settings = sample_settings();
        let theme = settings.theme("ch.Planungszonen").unwrap();
        for (extract, transfer) in [
            ("inForce", Some("inKraft")),
            ("changeWithPreEffect", Some("AenderungMitVorwirkung")),
            ("changeWithoutPreEffect", Some("AenderungOhneVorwirkung")),
            ("NotConfigured", None),
        ] {
            assert_eq!(theme.law_status_transfer_code(extract).as_deref(), transfer);
        }
    }

    #[test]
    fn test_document_type_extract_code() {
        let settings = sample_settings();
        let theme = settings.theme("ch.Planungszonen").unwrap();
        assert_eq!(theme.document_type_extract_code("decree"), Some("LegalProvision"));
        assert_eq!(theme.document_type_extract_code("unknown"), None);
    }

    #[test]
    fn test_unknown_theme() {
        let settings = sample_settings();
        let err = settings.theme("ch.Nope").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownTheme(code) if code == "ch.Nope"));
    }

    #[test]
    fn test_url_param() {
        let settings = sample_settings();
        assert_eq!(
            settings.oereblex.url_param("ch.StatischeWaldgrenzen"),
            Some("oereb_id=24")
        );
        assert_eq!(settings.oereblex.url_param("ch.Planungszonen"), None);
    }

    #[test]
    fn test_missing_section() {
        let err = Settings::from_yaml(SAMPLE_CONFIG, "other", false).unwrap_err();
        assert!(err.to_string().contains("section 'other' not found"));
    }

    #[test]
    fn test_c2ctemplate_style() {
        let wrapped = format!(
            "vars:\n{}",
            SAMPLE_CONFIG
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
        let settings = Settings::from_yaml(&wrapped, DEFAULT_SECTION, true).unwrap();
        assert_eq!(settings.master_language(), "de");

        // Without vars the c2ctemplate lookup fails
        assert!(Settings::from_yaml(SAMPLE_CONFIG, DEFAULT_SECTION, true).is_err());
    }

    #[test]
    fn test_validate_empty_languages() {
        let yaml = "pyramid_oereb:\n  language: []\n  oereblex:\n    host: https://x.ch\n";
        let err = Settings::from_yaml(yaml, DEFAULT_SECTION, false).unwrap_err();
        assert!(err.to_string().contains("at least one language"));
    }

    #[test]
    fn test_validate_default_language() {
        let yaml = "pyramid_oereb:\n  language: [de]\n  default_language: fr\n  oereblex:\n    host: https://x.ch\n";
        let err = Settings::from_yaml(yaml, DEFAULT_SECTION, false).unwrap_err();
        assert!(err.to_string().contains("default_language 'fr'"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Settings::from_yaml("pyramid_oereb: [unclosed", DEFAULT_SECTION, false)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Yaml(_)));
    }
}
