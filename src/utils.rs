use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use lecture_notes::error::Error;
use tempfile::NamedTempFile;

pub mod models;

/// Extension of the generated notes
pub const EXTENSION: &str = ".tex";

/// Where the template lives when none is given
const TEMPLATE_PATH: &str = "git/templates/lecture-template.tex";

/// Add the `.tex` extension if it's missing
pub fn with_extension(filename: &str) -> String {
    let filename = filename.trim();
    if filename.ends_with(EXTENSION) {
        filename.to_owned()
    } else {
        format!("{filename}{EXTENSION}")
    }
}

/// Template in the user's home
pub fn default_template_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(TEMPLATE_PATH))
}

pub fn read_template(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

/// Write the whole document in a temporary file of the same directory,
/// then rename it, so `path` is either untouched or complete
pub fn write_output(path: &Path, text: &str) -> Result<(), Error> {
    let io_error = |source: io::Error| Error::Io {
        path: path.to_owned(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(text.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_added_once() {
        assert_eq!(with_extension("EECS3311"), "EECS3311.tex");
        assert_eq!(with_extension("EECS3311.tex"), "EECS3311.tex");
        assert_eq!(with_extension(" notes "), "notes.tex");
    }

    #[test]
    fn missing_template_reports_path() {
        let path = Path::new("/nonexistent/lecture-template.tex");
        let err = read_template(path).unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/lecture-template.tex: "));
    }

    #[test]
    fn output_is_replaced_whole() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("EECS3311.tex");
        fs::write(&path, "old content that is longer than the new one\n").unwrap();

        write_output(&path, "\\begin{document}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\\begin{document}\n");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temporary file left behind");
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("EECS3311.tex");

        let err = write_output(&path, "text").unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
