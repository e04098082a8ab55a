//! Destination package discovery from Go sources.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use dataclass_schema::syntax::package_name;
use eyre::{Result, WrapErr, bail};

/// Name of the single package the patterns refer to.
///
/// A directory pattern contributes its non-test `.go` files; any other
/// pattern is read as a Go file.
pub fn find_package_name(patterns: &[PathBuf]) -> Result<String> {
    let mut names = BTreeSet::new();
    for path in source_files(patterns)? {
        let source = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        if let Some(name) = package_name(&source) {
            names.insert(name.to_string());
        }
    }

    let mut iter = names.into_iter();
    match (iter.next(), iter.len()) {
        (Some(name), 0) => Ok(name),
        (None, _) => bail!("0 packages found"),
        (Some(_), rest) => bail!("{} packages found", rest + 1),
    }
}

fn source_files(patterns: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if pattern.is_dir() {
            let entries = std::fs::read_dir(pattern)
                .wrap_err_with(|| format!("failed to read {}", pattern.display()))?;
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && is_package_source(&path) {
                    files.push(path);
                }
            }
        } else {
            files.push(pattern.clone());
        }
    }
    files.sort();
    Ok(files)
}

fn is_package_source(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".go") && !name.ends_with("_test.go"))
}
