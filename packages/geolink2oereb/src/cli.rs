//! Command-line interface for geolink2oereb.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DEFAULT_SECTION;
use crate::error::{ConversionError, Result};
use crate::oerebkrmtrsfr::{render_gathered, render_unified};
use crate::source::SourceKind;
use crate::transform::{assign_uuids, run_batch, unify_gathered, RunOptions};

/// geolink2oereb - Transform ÖREBlex geoLinks into OeREBKRMtrsfr_V2_0 entities.
#[derive(Parser)]
#[command(name = "geolink2oereb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download geoLinks and convert their documents to XML.
    Convert {
        /// geoLink collection id; repeat for a batch
        #[arg(short, long = "geolink-id", required = true)]
        geolink_ids: Vec<u64>,

        /// Theme code configured in the `plrs` section (e.g. ch.Planungszonen)
        #[arg(short, long)]
        theme_code: String,

        /// Path to the pyramid_oereb YAML configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Section of the configuration file
        #[arg(short, long, default_value = DEFAULT_SECTION)]
        section: String,

        /// How registry documents are turned into records
        #[arg(long, value_enum, default_value_t = SourceKind::Custom)]
        source: SourceKind,

        /// The configuration section is nested below `vars`
        #[arg(long)]
        c2ctemplate_style: bool,

        /// Deduplicate offices and documents and assign UUIDs
        #[arg(short, long)]
        unify: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        outfile: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            geolink_ids,
            theme_code,
            config,
            section,
            source,
            c2ctemplate_style,
            unify,
            outfile,
        } => {
            let options = RunOptions {
                theme_code,
                config_path: config,
                section,
                source,
                c2ctemplate_style,
            };
            convert_command(&geolink_ids, &options, unify, outfile.as_deref())
        }
    }
}

/// Execute the convert command.
fn convert_command(
    geolink_ids: &[u64],
    options: &RunOptions,
    unify: bool,
    outfile: Option<&Path>,
) -> Result<()> {
    if !options.config_path.is_file() {
        return Err(ConversionError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!(
                "Configuration file does not exist: {}",
                options.config_path.display()
            ),
        )));
    }

    eprintln!(
        "{} {} geoLink(s) for theme {}",
        style("Converting").bold(),
        style(geolink_ids.len()).cyan(),
        style(&options.theme_code).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Reading geoLinks...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let gathered = match run_batch(geolink_ids, options) {
        Ok(gathered) => gathered,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Rendering XML...");
    let xml = if unify {
        let (dokumente, aemter) = unify_gathered(gathered);
        let assignment = assign_uuids(dokumente, aemter);
        if !assignment.orphaned.is_empty() {
            eprintln!(
                "  Orphaned documents: {}",
                style(assignment.orphaned.len()).yellow().bold()
            );
        }
        eprintln!("  Offices: {}", assignment.aemter.len());
        eprintln!("  Documents: {}", assignment.dokumente.len());
        render_unified(&assignment.dokumente, &assignment.aemter)
    } else {
        eprintln!("  Documents: {}", gathered.len());
        render_gathered(&gathered)
    };
    pb.finish_and_clear();
    let xml = xml?;

    match outfile {
        Some(path) => {
            fs::write(path, format!("{xml}\n"))?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => println!("{xml}"),
    }

    Ok(())
}
