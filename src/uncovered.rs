use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::descriptor::render_signature;
use crate::error::{self, Result};

pub const UNCOVERED_FILE: &str = "uncovered.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUncovered {
    package_name: String,
    class_name: String,
    name: String,
    description: String,
}

/// A method no test reaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UncoveredMethod {
    pub package: String,
    pub class: String,
    pub method: String,
    pub descriptor: String,
    /// `class.method(params)`.
    pub signature: String,
}

/// Load the uncovered methods under `observations`, keeping only `packages`
/// (all of them when `packages` is empty). A missing file gives an empty list.
pub fn load_uncovered(observations: &Utf8Path, packages: &[String]) -> Result<Vec<UncoveredMethod>> {
    let path = observations.join(UNCOVERED_FILE);
    if !path.exists() {
        debug!("{}: not found", path);
        return Ok(Vec::new());
    }
    let raw: Vec<RawUncovered> = error::read_json(&path)?;
    raw.into_iter()
        .filter(|m| packages.is_empty() || packages.iter().any(|p| *p == m.package_name))
        .map(|m| {
            let signature = format!("{}.{}", m.class_name, render_signature(&m.name, &m.description)?);
            Ok(UncoveredMethod {
                package: m.package_name,
                class: m.class_name,
                method: m.name,
                descriptor: m.description,
                signature,
            })
        })
        .collect()
}
