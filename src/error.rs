use camino::Utf8PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Malformed descriptor `{descriptor}`: {reason}")]
    MalformedDescriptor { descriptor: String, reason: String },

    #[error("Malformed pointcut `{0}`")]
    MalformedPointcut(String),

    #[error("Missing required artifact: {0}")]
    MissingArtifact(Utf8PathBuf),

    #[error("Diff at `{pointcut}` carries a value that is neither an exception, a literal nor a null flag")]
    UnclassifiableValue { pointcut: String },

    #[error("Diff at `{0}` has no observed value")]
    MissingObservedValue(String),

    #[error("Unknown hint type `{0}`")]
    UnknownHintKind(String),

    #[error("Hint of type `{kind}` is missing `{field}`")]
    MissingHintField { kind: String, field: &'static str },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid XML in {path}: {source}")]
    Xml {
        path: Utf8PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Malformed report {path}: {reason}")]
    MalformedReport { path: Utf8PathBuf, reason: String },
}

impl ReportError {
    /// Errors caused by bad input rather than by the filesystem.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ReportError::Io { .. })
    }
}

/// Read a file, keeping the path in the error.
pub(crate) fn read_file(path: &camino::Utf8Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ReportError::MissingArtifact(path.to_path_buf())
        } else {
            ReportError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Read and deserialize a JSON file.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &camino::Utf8Path) -> Result<T> {
    let data = read_file(path)?;
    serde_json::from_str(&data).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })
}
