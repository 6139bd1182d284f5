use std::collections::HashMap;

use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{self, ReportError, Result};
use crate::pointcut::{Pointcut, parse_pointcut};

/// One value as the observation tool reported it.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValue {
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub exception_message: Option<String>,
    #[serde(default)]
    pub literal_value: Option<serde_json::Value>,
    #[serde(default)]
    pub is_null: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueDescriptor {
    Exception { type_name: String, message: String },
    Literal { value: String },
    Null { is_null: bool },
}

impl ValueDescriptor {
    /// Exception first, then literal, then the null flag. An exception needs its type.
    pub fn classify(raw: &RawValue, pointcut: &str) -> Result<Self> {
        let unclassifiable = || ReportError::UnclassifiableValue {
            pointcut: pointcut.to_string(),
        };
        if let Some(message) = &raw.exception_message {
            return Ok(ValueDescriptor::Exception {
                type_name: raw.type_name.clone().ok_or_else(unclassifiable)?,
                message: message.clone(),
            });
        }
        if let Some(literal) = &raw.literal_value {
            let value = match literal {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(ValueDescriptor::Literal { value });
        }
        if let Some(is_null) = raw.is_null {
            return Ok(ValueDescriptor::Null { is_null });
        }
        Err(unclassifiable())
    }
}

#[derive(Debug, Deserialize)]
pub struct RawDiff {
    pub pointcut: String,
    #[serde(default)]
    pub expected: Vec<RawValue>,
    #[serde(default)]
    pub unexpected: Vec<RawValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diff {
    pub raw_pointcut: String,
    pub pointcut: Pointcut,
    pub expected: ValueDescriptor,
    pub observed: ValueDescriptor,
}

/// Diffs of one hint folder, keyed by pointcut and kept in file order.
#[derive(Debug, Default)]
pub struct DiffIndex {
    diffs: Vec<Diff>,
    by_pointcut: HashMap<String, usize>,
}

impl DiffIndex {
    /// Load `diff.json`. A missing file gives an empty index.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.exists() {
            debug!("{}: no diffs", path);
            return Ok(DiffIndex::default());
        }
        let entries: Vec<RawDiff> = error::read_json(path)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<RawDiff>) -> Result<Self> {
        let mut index = DiffIndex::default();
        for entry in entries {
            // Several expected values make the observation ambiguous.
            if entry.expected.len() != 1 {
                debug!(
                    "dropping diff at {} with {} expected values",
                    entry.pointcut,
                    entry.expected.len()
                );
                continue;
            }
            let pointcut = parse_pointcut(&entry.pointcut)?;
            let expected = ValueDescriptor::classify(&entry.expected[0], &entry.pointcut)?;
            let observed = entry
                .unexpected
                .first()
                .ok_or_else(|| ReportError::MissingObservedValue(entry.pointcut.clone()))
                .and_then(|v| ValueDescriptor::classify(v, &entry.pointcut))?;
            index.insert(Diff {
                raw_pointcut: entry.pointcut,
                pointcut,
                expected,
                observed,
            });
        }
        Ok(index)
    }

    fn insert(&mut self, diff: Diff) {
        match self.by_pointcut.get(&diff.raw_pointcut) {
            Some(&pos) => self.diffs[pos] = diff,
            None => {
                self.by_pointcut.insert(diff.raw_pointcut.clone(), self.diffs.len());
                self.diffs.push(diff);
            }
        }
    }

    pub fn get(&self, pointcut: &str) -> Option<&Diff> {
        self.by_pointcut.get(pointcut).map(|&pos| &self.diffs[pos])
    }

    pub fn first(&self) -> Option<&Diff> {
        self.diffs.first()
    }

    /// Diffs in insertion order.
    pub fn diffs(&self) -> &[Diff] {
        &self.diffs
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }
}
