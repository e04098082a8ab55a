//! Writing the generated file and formatting it with goimports.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use dataclass_core::File;
use eyre::{Result, WrapErr, bail};
use tracing::debug;

/// File name used when no output path is given.
pub const DEFAULT_FILENAME: &str = "dataclass.go";

/// Runs `<goimports> -w <file>`.
#[derive(Debug, Clone)]
pub struct Formatter {
    program: PathBuf,
}

impl Formatter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn format(&self, file: &Path) -> Result<()> {
        debug!(program = %self.program.display(), file = %file.display(), "formatting");
        let status = Command::new(&self.program)
            .arg("-w")
            .arg(file)
            .stderr(Stdio::inherit())
            .status()
            .wrap_err_with(|| format!("failed to run {}", self.program.display()))?;
        if !status.success() {
            bail!("{} exited with {}", self.program.display(), status);
        }
        Ok(())
    }
}

/// Directory the output lands in: the single directory pattern, else the
/// parent of the first pattern.
pub fn dest_dir(patterns: &[PathBuf]) -> Result<PathBuf> {
    let Some(first) = patterns.first() else {
        return Ok(PathBuf::from("."));
    };
    if patterns.len() == 1 {
        let meta = std::fs::metadata(first)
            .wrap_err_with(|| format!("failed to read {}", first.display()))?;
        if meta.is_dir() {
            return Ok(first.clone());
        }
    }
    Ok(match first.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    })
}

pub fn dest_filename(output: Option<&Path>, patterns: &[PathBuf]) -> Result<PathBuf> {
    match output {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(dest_dir(patterns)?.join(DEFAULT_FILENAME)),
    }
}

/// Write `content` to `path`, then format it in place unless `formatter` is `None`.
pub fn write_and_format(path: &Path, content: &str, formatter: Option<&Formatter>) -> Result<()> {
    File::new(path, content).write()?;
    if let Some(formatter) = formatter {
        formatter.format(path).wrap_err("failed to goimport")?;
    }
    Ok(())
}

/// Format through a temporary file and copy the result to stdout.
pub fn write_to_stdout(content: &str, formatter: Option<&Formatter>) -> Result<()> {
    let temp = tempfile::Builder::new()
        .prefix("dataclass")
        .suffix(".go")
        .tempfile()
        .wrap_err("failed to create temp file")?;
    write_and_format(temp.path(), content, formatter)?;

    let formatted = std::fs::read(temp.path())
        .wrap_err_with(|| format!("failed to read {}", temp.path().display()))?;
    std::io::stdout()
        .lock()
        .write_all(&formatted)
        .wrap_err("failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_dest_dir_defaults_to_current() {
        assert_eq!(dest_dir(&[]).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_dest_dir_single_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();
        assert_eq!(dest_dir(std::slice::from_ref(&dir)).unwrap(), dir);
    }

    #[test]
    fn test_dest_dir_file_parent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.go");
        fs::write(&file, "package a\n").unwrap();
        assert_eq!(dest_dir(&[file]).unwrap(), temp.path());
    }

    #[test]
    fn test_dest_dir_several_patterns_uses_first_parent() {
        let patterns = [PathBuf::from("pkg/a.go"), PathBuf::from("pkg/b.go")];
        assert_eq!(dest_dir(&patterns).unwrap(), PathBuf::from("pkg"));

        let bare = [PathBuf::from("a.go"), PathBuf::from("b.go")];
        assert_eq!(dest_dir(&bare).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_dest_dir_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        assert!(dest_dir(&[missing]).is_err());
    }

    #[test]
    fn test_dest_filename() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();
        assert_eq!(
            dest_filename(None, std::slice::from_ref(&dir)).unwrap(),
            dir.join(DEFAULT_FILENAME)
        );
        assert_eq!(
            dest_filename(Some(Path::new("out.go")), &[dir]).unwrap(),
            PathBuf::from("out.go")
        );
    }

    #[test]
    fn test_write_without_formatter() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dataclass.go");
        write_and_format(&path, "package main\n", None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "package main\n");
    }

    #[test]
    fn test_missing_formatter_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dataclass.go");
        let formatter = Formatter::new(temp.path().join("no-such-goimports"));
        let err = write_and_format(&path, "package main\n", Some(&formatter)).unwrap_err();
        assert_eq!(err.to_string(), "failed to goimport");
        assert!(path.exists());
    }
}
