use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{ReportError, Result};
use crate::hints::HINTS_FILE;

/// Hint folders under an observations directory, sorted by path.
///
/// Method observations live two levels below `methods/`, test observations one
/// level below `tests/`. A missing subtree contributes nothing.
pub fn find_hint_folders(observations: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let mut folders = Vec::new();
    collect(&observations.join("methods"), 2, &mut folders)?;
    collect(&observations.join("tests"), 1, &mut folders)?;
    folders.sort();
    Ok(folders)
}

fn collect(dir: &Utf8Path, depth: usize, out: &mut Vec<Utf8PathBuf>) -> Result<()> {
    if depth == 0 {
        if dir.join(HINTS_FILE).is_file() {
            out.push(dir.to_path_buf());
        }
        return Ok(());
    }
    let entries = match dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(ReportError::Io {
                path: dir.to_path_buf(),
                source,
            });
        }
    };
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.path().is_dir() {
            collect(entry.path(), depth - 1, out)?;
        }
    }
    Ok(())
}
