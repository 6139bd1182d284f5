use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use serde::Serialize;

use crate::descriptor::parse_descriptor;
use crate::diff_index::{Diff, DiffIndex};
use crate::error::{ReportError, Result};
use crate::hints::{self, DIFF_FILE, Hint, HintArtifact, MutantArtifact};
use crate::location_index::{LocationIndex, MethodKey};
use crate::mutation_index::MutationIndex;
use crate::test_case::TestCase;

/// The survived mutant a record talks about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutantSummary {
    pub mutator: String,
    pub class: String,
    pub full_class_name: String,
    pub method: String,
    pub descriptor: String,
    /// `method(params)`.
    pub signature: String,
    pub is_void: bool,
    pub tests: Vec<TestCase>,
    pub line: Option<u32>,
}

/// One explanation: a survived mutant, one of its hints and at most one diff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    pub folder: Utf8PathBuf,
    pub mutation: MutantSummary,
    pub hint: Hint,
    pub diff: Option<Diff>,
}

/// Report-wide indices, shared read-only by every hint folder.
#[derive(Debug, Default)]
pub struct Indices {
    pub mutations: MutationIndex,
    pub locations: LocationIndex,
}

/// Pick the diff shown with a hint.
///
/// The addressed pointcut is looked up first, then replaced by the first diff of
/// the folder whenever the folder has any.
// TODO: prefer the addressed diff once report readers agree on the change.
pub fn select_diff<'a>(diffs: &'a DiffIndex, pointcut: Option<&str>) -> Option<&'a Diff> {
    let addressed = pointcut.and_then(|p| diffs.get(p));
    if let Some(first) = diffs.first() {
        return Some(first);
    }
    addressed
}

fn summarize(mutant: &MutantArtifact, indices: &Indices) -> Result<MutantSummary> {
    let signature = parse_descriptor(&mutant.description)?;
    let full_class_name = mutant.full_class_name();

    let tests = match indices.mutations.tests_for(&mutant.identity()) {
        Some(tests) => tests.to_vec(),
        None => mutant.tests.iter().map(|t| TestCase::parse(t)).collect(),
    };
    let line = indices
        .locations
        .line_for(&MethodKey::new(&full_class_name, &mutant.method, &mutant.description));

    Ok(MutantSummary {
        mutator: mutant.mutator.clone(),
        class: mutant.class.clone(),
        full_class_name,
        method: mutant.method.clone(),
        descriptor: mutant.description.clone(),
        signature: format!("{}{}", mutant.method, signature.param_list()),
        is_void: signature.is_void,
        tests,
        line,
    })
}

/// Build one record per hint from already loaded artifacts.
///
/// A mutant the report lists only as detected gets no records.
pub fn assemble(
    folder: &Utf8Path,
    mutant: &MutantArtifact,
    artifact: HintArtifact,
    diffs: &DiffIndex,
    indices: &Indices,
) -> Result<Vec<DiagnosticRecord>> {
    if indices.mutations.is_rejected(&mutant.identity()) {
        debug!("{}: mutant was not reported as survived, skipping", folder);
        return Ok(Vec::new());
    }
    let summary = summarize(mutant, indices)?;
    artifact
        .into_hints()
        .iter()
        .map(|raw| {
            let hint = hints::classify(raw, mutant)?;
            let diff = select_diff(diffs, hint.pointcut.as_deref()).cloned();
            Ok(DiagnosticRecord {
                folder: folder.to_path_buf(),
                mutation: summary.clone(),
                hint,
                diff,
            })
        })
        .collect()
}

/// Read a hint folder and build its records.
pub fn assemble_folder(folder: &Utf8Path, indices: &Indices) -> Result<Vec<DiagnosticRecord>> {
    let mutant = MutantArtifact::load(folder)?;
    let hints = HintArtifact::load(folder)?;
    let diffs = DiffIndex::load(&folder.join(DIFF_FILE))?;
    debug!("{}: {} diffs", folder, diffs.len());
    assemble(folder, &mutant, hints, &diffs, indices)
}

/// A folder that could not be turned into records.
#[derive(Debug)]
pub struct FolderFailure {
    pub folder: Utf8PathBuf,
    pub error: ReportError,
}

/// Assemble every folder in order. Failing folders are logged and collected, not fatal.
pub fn assemble_all(
    folders: &[Utf8PathBuf],
    indices: &Indices,
) -> (Vec<DiagnosticRecord>, Vec<FolderFailure>) {
    let mut records = Vec::new();
    let mut failures = Vec::new();
    for folder in folders {
        match assemble_folder(folder, indices) {
            Ok(mut rs) => records.append(&mut rs),
            Err(error) => {
                warn!("skipping {}: {}", folder, error);
                failures.push(FolderFailure {
                    folder: folder.clone(),
                    error,
                });
            }
        }
    }
    (records, failures)
}
