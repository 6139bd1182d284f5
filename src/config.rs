use camino::{Utf8Path, Utf8PathBuf};

pub const DEFAULT_TARGET_DIR: &str = "target";

/// Where the report inputs live.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub mutations_json: Utf8PathBuf,
    pub mutations_xml: Utf8PathBuf,
    pub observations_dir: Utf8PathBuf,
    /// Packages kept in the uncovered list. Empty keeps every package.
    pub packages: Vec<String>,
}

impl ReportConfig {
    /// The layout the mutation and observation tools write under a build directory.
    pub fn for_target(target: &Utf8Path) -> Self {
        ReportConfig {
            mutations_json: target.join("mutations.json"),
            mutations_xml: target.join("mutations.xml"),
            observations_dir: target.join("reneri").join("observations"),
            packages: Vec::new(),
        }
    }

    pub fn with_mutations_json(mut self, path: Option<Utf8PathBuf>) -> Self {
        if let Some(p) = path {
            self.mutations_json = p;
        }
        self
    }

    pub fn with_mutations_xml(mut self, path: Option<Utf8PathBuf>) -> Self {
        if let Some(p) = path {
            self.mutations_xml = p;
        }
        self
    }

    pub fn with_observations_dir(mut self, path: Option<Utf8PathBuf>) -> Self {
        if let Some(p) = path {
            self.observations_dir = p;
        }
        self
    }

    pub fn with_packages(mut self, packages: Vec<String>) -> Self {
        self.packages = packages;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::for_target(Utf8Path::new(DEFAULT_TARGET_DIR))
    }
}
