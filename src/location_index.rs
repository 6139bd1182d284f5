use std::collections::HashMap;

use camino::Utf8Path;
use log::debug;

use crate::error::{ReportError, Result};
use crate::mutation_index::SURVIVED;

/// `(fully qualified class, method, descriptor)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub class: String,
    pub method: String,
    pub descriptor: String,
}

impl MethodKey {
    pub fn new(class: &str, method: &str, descriptor: &str) -> Self {
        MethodKey {
            class: class.to_string(),
            method: method.to_string(),
            descriptor: descriptor.to_string(),
        }
    }
}

/// Source line of each survived mutant, read from the XML report.
#[derive(Debug, Default)]
pub struct LocationIndex {
    lines: HashMap<MethodKey, u32>,
}

impl LocationIndex {
    /// Load the XML report. A missing file gives an empty index.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let xml = match std::fs::read_to_string(path) {
            Ok(xml) => xml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{}: not found, line numbers unavailable", path);
                return Ok(LocationIndex::default());
            }
            Err(source) => {
                return Err(ReportError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let index = Self::from_xml(&xml).map_err(|e| match e {
            LoadError::Xml(source) => ReportError::Xml {
                path: path.to_path_buf(),
                source,
            },
            LoadError::Malformed(reason) => ReportError::MalformedReport {
                path: path.to_path_buf(),
                reason,
            },
        })?;
        debug!("{}: {} survived mutant locations indexed", path, index.len());
        Ok(index)
    }

    pub fn from_xml(xml: &str) -> std::result::Result<Self, LoadError> {
        let doc = roxmltree::Document::parse(xml).map_err(LoadError::Xml)?;
        let mut lines = HashMap::new();
        for mutation in doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("mutation"))
        {
            if mutation.attribute("status") != Some(SURVIVED) {
                continue;
            }
            let class = child_text(mutation, "mutatedClass")?;
            let method = child_text(mutation, "mutatedMethod")?;
            let descriptor = child_text(mutation, "methodDescription")?;
            let line_text = child_text(mutation, "lineNumber")?;
            let line = line_text
                .trim()
                .parse()
                .map_err(|_| LoadError::Malformed(format!("invalid lineNumber `{line_text}`")))?;
            lines.insert(MethodKey::new(class, method, descriptor), line);
        }
        Ok(LocationIndex { lines })
    }

    pub fn line_for(&self, key: &MethodKey) -> Option<u32> {
        self.lines.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug)]
pub enum LoadError {
    Xml(roxmltree::Error),
    Malformed(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Xml(e) => write!(f, "{e}"),
            LoadError::Malformed(reason) => f.write_str(reason),
        }
    }
}

fn child_text<'a>(node: roxmltree::Node<'a, '_>, tag: &str) -> std::result::Result<&'a str, LoadError> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .map(|n| n.text().unwrap_or(""))
        .ok_or_else(|| LoadError::Malformed(format!("<mutation> without <{tag}>")))
}
