//! Artifacts of one hint folder: the mutant description and its hints.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::descriptor::MethodRef;
use crate::error::{self, ReportError, Result};
use crate::mutation_index::{MutationIdentity, qualify};

pub const MUTATION_FILE: &str = "mutation.json";
pub const HINTS_FILE: &str = "hints.json";
pub const DIFF_FILE: &str = "diff.json";

/// Contents of `mutation.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MutantArtifact {
    #[serde(default)]
    pub package: String,
    pub class: String,
    pub method: String,
    pub description: String,
    pub mutator: String,
    #[serde(default)]
    pub tests: Vec<String>,
}

impl MutantArtifact {
    pub fn load(folder: &Utf8Path) -> Result<Self> {
        error::read_json(&folder.join(MUTATION_FILE))
    }

    pub fn identity(&self) -> MutationIdentity {
        MutationIdentity {
            package: self.package.replace('/', "."),
            class: self.class.clone(),
            method: self.method.clone(),
            descriptor: self.description.clone(),
            mutator: self.mutator.clone(),
        }
    }

    pub fn full_class_name(&self) -> String {
        qualify(&self.package.replace('/', "."), &self.class)
    }
}

/// A method as hints address it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMethod {
    pub class: String,
    pub method: String,
    pub desc: String,
}

impl RawMethod {
    pub fn resolve(&self) -> Result<MethodRef> {
        MethodRef::new(&self.class, &self.method, &self.desc)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHint {
    #[serde(rename = "hint-type")]
    pub hint_type: String,
    #[serde(rename = "entry-points", default)]
    pub entry_points: Option<Vec<RawMethod>>,
    #[serde(default)]
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub accessors: Option<Vec<RawMethod>>,
    #[serde(default)]
    pub pointcut: Option<String>,
}

/// `hints.json` holds either one hint or a list of them.
#[derive(Debug)]
pub enum HintArtifact {
    Many(Vec<RawHint>),
    One(RawHint),
}

impl HintArtifact {
    pub fn load(folder: &Utf8Path) -> Result<Self> {
        let path = folder.join(HINTS_FILE);
        let value: serde_json::Value = error::read_json(&path)?;
        Self::from_value(value).map_err(|source| ReportError::Json { path, source })
    }

    /// Branch on the JSON shape first so field errors inside a hint stay visible.
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<serde_json::Result<Vec<RawHint>>>()
                .map(HintArtifact::Many),
            other => serde_json::from_value(other).map(HintArtifact::One),
        }
    }

    pub fn into_hints(self) -> Vec<RawHint> {
        match self {
            HintArtifact::Many(hints) => hints,
            HintArtifact::One(hint) => vec![hint],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HintKind {
    /// The mutation is visible from outside the mutated method.
    Infection {
        entry_points: Vec<MethodRef>,
        direct_access: bool,
    },
    /// A local value diverges; `location` is passed through untouched.
    Observation { location: serde_json::Value },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hint {
    #[serde(flatten)]
    pub kind: HintKind,
    /// Accessors when the hint names them, entry points otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<MethodRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointcut: Option<String>,
}

fn resolve_all(methods: &[RawMethod]) -> Result<Vec<MethodRef>> {
    methods.iter().map(RawMethod::resolve).collect()
}

/// Turn a raw hint into its typed form for the given mutant.
pub fn classify(raw: &RawHint, mutant: &MutantArtifact) -> Result<Hint> {
    let missing = |field| ReportError::MissingHintField {
        kind: raw.hint_type.clone(),
        field,
    };

    let mut targets = None;
    let kind = match raw.hint_type.as_str() {
        "infection" => {
            let entry_points = resolve_all(raw.entry_points.as_deref().ok_or_else(|| missing("entry-points"))?)?;
            let class = mutant.full_class_name();
            let direct_access = entry_points
                .iter()
                .any(|m| m.is_same_method(&class, &mutant.method, &mutant.description));
            targets = Some(entry_points.clone());
            HintKind::Infection {
                entry_points,
                direct_access,
            }
        }
        "observation" => HintKind::Observation {
            location: raw.location.clone().ok_or_else(|| missing("location"))?,
        },
        other => return Err(ReportError::UnknownHintKind(other.to_string())),
    };

    if let Some(accessors) = &raw.accessors {
        targets = Some(resolve_all(accessors)?);
    }

    Ok(Hint {
        kind,
        targets,
        pointcut: raw.pointcut.clone(),
    })
}
