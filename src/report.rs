use log::info;
use serde::Serialize;

use crate::assembler::{self, DiagnosticRecord, FolderFailure, Indices};
use crate::config::ReportConfig;
use crate::discovery;
use crate::error::Result;
use crate::location_index::LocationIndex;
use crate::mutation_index::MutationIndex;
use crate::uncovered::{self, UncoveredMethod};

#[derive(Debug, Serialize)]
pub struct Report {
    pub uncovered: Vec<UncoveredMethod>,
    pub hints: Vec<DiagnosticRecord>,
}

pub struct ReportOutcome {
    pub report: Report,
    pub failures: Vec<FolderFailure>,
}

/// Load both mutation reports. Any failure here ends the run.
pub fn load_indices(config: &ReportConfig) -> Result<Indices> {
    let mutations = MutationIndex::load(&config.mutations_json)?;
    let locations = LocationIndex::load(&config.mutations_xml)?;
    info!(
        "{} survived mutants, {} with a source line",
        mutations.len(),
        locations.len()
    );
    Ok(Indices {
        mutations,
        locations,
    })
}

/// Run the whole pipeline. Only report-wide inputs are fatal; bad hint folders
/// end up in `failures`.
pub fn build_report(config: &ReportConfig) -> Result<ReportOutcome> {
    let indices = load_indices(config)?;
    let uncovered = uncovered::load_uncovered(&config.observations_dir, &config.packages)?;
    let folders = discovery::find_hint_folders(&config.observations_dir)?;
    info!("{} hint folders under {}", folders.len(), config.observations_dir);

    let (hints, failures) = assembler::assemble_all(&folders, &indices);
    Ok(ReportOutcome {
        report: Report { uncovered, hints },
        failures,
    })
}
