use std::collections::{HashMap, HashSet};

use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::test_case::TestCase;

/// Status the mutation tool writes for a mutant no test detected.
pub const SURVIVED: &str = "SURVIVED";

/// Composite key of one mutant. Both report formats and the hint folders resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MutationIdentity {
    pub package: String,
    pub class: String,
    pub method: String,
    pub descriptor: String,
    pub mutator: String,
}

impl MutationIdentity {
    pub fn full_class_name(&self) -> String {
        qualify(&self.package, &self.class)
    }
}

pub(crate) fn qualify(package: &str, class: &str) -> String {
    if package.is_empty() {
        class.to_string()
    } else {
        format!("{package}.{class}")
    }
}

#[derive(Debug, Deserialize)]
struct JsonReport {
    mutations: Vec<JsonMutation>,
}

#[derive(Debug, Deserialize)]
struct JsonMutation {
    status: String,
    mutator: String,
    method: JsonMethod,
    #[serde(default)]
    tests: JsonTests,
}

#[derive(Debug, Deserialize)]
struct JsonMethod {
    #[serde(default)]
    package: String,
    class: String,
    name: String,
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct JsonTests {
    #[serde(default)]
    ordered: Vec<String>,
}

/// Tests that ran against each survived mutant, in the order the report lists them.
#[derive(Debug, Default)]
pub struct MutationIndex {
    tests: HashMap<MutationIdentity, Vec<TestCase>>,
    /// Mutants the report lists only with another status.
    rejected: HashSet<MutationIdentity>,
}

impl MutationIndex {
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let report: JsonReport = error::read_json(path)?;
        let index = Self::from_report(report);
        debug!("{}: {} survived mutants indexed", path, index.len());
        Ok(index)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::from_report(serde_json::from_str(json)?))
    }

    fn from_report(report: JsonReport) -> Self {
        let mut tests = HashMap::new();
        let mut rejected = HashSet::new();
        for mutation in report.mutations {
            let id = MutationIdentity {
                package: mutation.method.package.replace('/', "."),
                class: mutation.method.class,
                method: mutation.method.name,
                descriptor: mutation.method.description,
                mutator: mutation.mutator,
            };
            if mutation.status != SURVIVED {
                rejected.insert(id);
                continue;
            }
            let cases: Vec<TestCase> = mutation.tests.ordered.iter().map(|t| TestCase::parse(t)).collect();
            if tests.insert(id.clone(), cases).is_some() {
                debug!("duplicate survived mutant {:?}, keeping the later entry", id);
            }
        }
        rejected.retain(|id| !tests.contains_key(id));
        MutationIndex { tests, rejected }
    }

    pub fn tests_for(&self, id: &MutationIdentity) -> Option<&[TestCase]> {
        self.tests.get(id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: &MutationIdentity) -> bool {
        self.tests.contains_key(id)
    }

    /// Listed in the report, but never as survived.
    pub fn is_rejected(&self, id: &MutationIdentity) -> bool {
        self.rejected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
