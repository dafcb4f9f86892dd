//! Entry points of the conversion.
//!
//! [`run`] and [`run_batch`] load geoLink collections and translate them into
//! `(Dokument, Amt)` pairs. [`unify_gathered`] and [`assign_uuids`] turn
//! gathered pairs into a deduplicated entity set with stable identifiers.

use std::collections::HashSet;
use std::path::PathBuf;

use uuid::Uuid;

use crate::config::{Settings, DEFAULT_SECTION};
use crate::error::Result;
use crate::loader::load;
use crate::oerebkrmtrsfr::{document_record_to_dokument, Amt, Dokument};
use crate::source::{DocumentRegistry, OereblexSource, SourceKind};

/// A translated document together with its responsible office.
pub type Gathered = (Dokument, Amt);

/// Options shared by every conversion of a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Theme whose configuration applies.
    pub theme_code: String,

    /// Path to the `pyramid_oereb` YAML configuration.
    pub config_path: PathBuf,

    /// Section of the configuration file.
    pub section: String,

    /// Strategy used to build records from the registry.
    pub source: SourceKind,

    /// Whether the section is nested below `vars`.
    pub c2ctemplate_style: bool,
}

impl RunOptions {
    #[must_use]
    pub fn new(theme_code: impl Into<String>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            theme_code: theme_code.into(),
            config_path: config_path.into(),
            section: DEFAULT_SECTION.to_string(),
            source: SourceKind::default(),
            c2ctemplate_style: false,
        }
    }

    fn settings(&self) -> Result<Settings> {
        Settings::load(&self.config_path, &self.section, self.c2ctemplate_style)
    }
}

/// Convert one geoLink collection.
pub fn run(geolink_id: u64, options: &RunOptions) -> Result<Vec<Gathered>> {
    run_batch(&[geolink_id], options)
}

/// Convert several geoLink collections.
///
/// The configuration is loaded once. Results are concatenated in input order
/// without deduplication.
pub fn run_batch(geolink_ids: &[u64], options: &RunOptions) -> Result<Vec<Gathered>> {
    let settings = options.settings()?;
    let source = OereblexSource::new(&settings, &options.theme_code, options.source)?;

    let mut gathered = Vec::new();
    for &geolink_id in geolink_ids {
        gathered.extend(run_with(&source, &settings, &options.theme_code, geolink_id)?);
    }
    Ok(gathered)
}

/// Convert one geoLink collection read from `registry`.
pub fn run_with<R: DocumentRegistry + ?Sized>(
    registry: &R,
    settings: &Settings,
    theme_code: &str,
    geolink_id: u64,
) -> Result<Vec<Gathered>> {
    let records = load(registry, settings, theme_code, geolink_id)?;
    Ok(records.iter().map(document_record_to_dokument).collect())
}

/// Deduplicate gathered pairs.
///
/// Offices are identified by their transient content id and documents by
/// their TID. The first occurrence wins and order is preserved.
#[must_use]
pub fn unify_gathered(gathered: Vec<Gathered>) -> (Vec<Dokument>, Vec<Amt>) {
    let mut seen_aemter = HashSet::new();
    let mut seen_dokumente = HashSet::new();
    let mut aemter = Vec::new();
    let mut dokumente = Vec::new();

    for (dokument, amt) in gathered {
        if seen_aemter.insert(amt.tid.clone()) {
            aemter.push(amt);
        }
        if seen_dokumente.insert(dokument.tid.clone()) {
            dokumente.push(dokument);
        }
    }

    tracing::debug!(
        dokumente = dokumente.len(),
        aemter = aemter.len(),
        "Unified gathered entities"
    );
    (dokumente, aemter)
}

/// Result of [`assign_uuids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Documents with fresh TIDs, grouped by office in office order.
    pub dokumente: Vec<Dokument>,

    /// Offices with fresh TIDs.
    pub aemter: Vec<Amt>,

    /// Documents whose reference matched no office; left unchanged.
    pub orphaned: Vec<Dokument>,
}

/// Replace transient identifiers with fresh v4 UUIDs.
///
/// Each office gets a new UUID; every document referencing the office's old
/// id is repointed to it and gets a UUID of its own.
#[must_use]
pub fn assign_uuids(dokumente: Vec<Dokument>, aemter: Vec<Amt>) -> Assignment {
    let mut pending: Vec<Option<Dokument>> = dokumente.into_iter().map(Some).collect();
    let mut assigned = Vec::with_capacity(pending.len());
    let mut assigned_aemter = Vec::with_capacity(aemter.len());

    for mut amt in aemter {
        let amt_uuid = Uuid::new_v4().to_string();
        for slot in &mut pending {
            let Some(mut dokument) =
                slot.take_if(|dokument| dokument.zustaendige_stelle.reference == amt.tid)
            else {
                continue;
            };
            dokument.zustaendige_stelle.reference.clone_from(&amt_uuid);
            dokument.tid = Uuid::new_v4().to_string();
            assigned.push(dokument);
        }
        amt.tid = amt_uuid;
        assigned_aemter.push(amt);
    }

    let orphaned: Vec<Dokument> = pending.into_iter().flatten().collect();
    for dokument in &orphaned {
        tracing::warn!(
            tid = %dokument.tid,
            reference = %dokument.zustaendige_stelle.reference,
            "Document references no known office"
        );
    }

    Assignment {
        dokumente: assigned,
        aemter: assigned_aemter,
        orphaned,
    }
}
