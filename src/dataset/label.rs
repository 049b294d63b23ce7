/// Binary classifier labels and the sidecar label reader
///
/// Each `<name>.jpg` has a `<name>.txt` next to it whose first line holds the
/// classifier's prediction. A first line containing `clear` means CLEAR,
/// anything else means CLOUDS.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ReviewError};

/// Token searched for (case-sensitive) in the sidecar's first line
const CLEAR_TOKEN: &str = "clear";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Clear,
    Clouds,
}

impl Label {
    /// The opposite label
    pub fn flipped(self) -> Self {
        match self {
            Label::Clear => Label::Clouds,
            Label::Clouds => Label::Clear,
        }
    }

    /// Class index as written by the classifier (CLEAR = 0, CLOUDS = 1)
    pub fn index(self) -> u8 {
        match self {
            Label::Clear => 0,
            Label::Clouds => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Clear => "CLEAR",
            Label::Clouds => "CLOUDS",
        }
    }

    /// Classify one line of sidecar text
    pub fn from_line(line: &str) -> Self {
        if line.contains(CLEAR_TOKEN) {
            Label::Clear
        } else {
            Label::Clouds
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the predicted label from a sidecar text file
///
/// Only the first line of the trimmed content is inspected. A missing file
/// and a file with no text are both errors, never defaulted.
pub fn read_label(sidecar: &Path) -> Result<Label> {
    let content = fs::read_to_string(sidecar).map_err(|source| {
        match source.kind() {
            ErrorKind::NotFound => ReviewError::MissingSidecar(sidecar.to_path_buf()),
            // Not UTF-8: no readable label line
            ErrorKind::InvalidData => ReviewError::EmptyLabelFile(sidecar.to_path_buf()),
            _ => ReviewError::Io {
                path: sidecar.to_path_buf(),
                source,
            },
        }
    })?;

    let first_line = content
        .trim()
        .lines()
        .next()
        .ok_or_else(|| ReviewError::EmptyLabelFile(sidecar.to_path_buf()))?;

    Ok(Label::from_line(first_line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sidecar(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_clear_first_line() {
        let dir = tempdir().unwrap();
        let path = sidecar(dir.path(), "a.txt", "clear sky\n");
        assert_eq!(read_label(&path).unwrap(), Label::Clear);
    }

    #[test]
    fn test_clouds_first_line() {
        let dir = tempdir().unwrap();
        let path = sidecar(dir.path(), "b.txt", "clouds 0.92\n");
        assert_eq!(read_label(&path).unwrap(), Label::Clouds);
    }

    #[test]
    fn test_only_first_line_counts() {
        let dir = tempdir().unwrap();
        let path = sidecar(dir.path(), "c.txt", "\n  clouds 0.61\nclear 0.39\n");
        assert_eq!(read_label(&path).unwrap(), Label::Clouds);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(Label::from_line("CLEAR 0.99"), Label::Clouds);
        assert_eq!(Label::from_line("mostly clear"), Label::Clear);
    }

    #[test]
    fn test_empty_file_is_error() {
        let dir = tempdir().unwrap();
        let path = sidecar(dir.path(), "d.txt", " \n\n\t");
        let err = read_label(&path).unwrap_err();
        assert!(matches!(err, ReviewError::EmptyLabelFile(p) if p == path));
    }

    #[test]
    fn test_non_utf8_file_has_no_label_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("e.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let err = read_label(&path).unwrap_err();
        assert!(err.is_sidecar_error());
        assert!(matches!(err, ReviewError::EmptyLabelFile(p) if p == path));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_label(&path).unwrap_err();
        assert!(matches!(err, ReviewError::MissingSidecar(p) if p == path));
    }

    #[test]
    fn test_flip_and_index() {
        assert_eq!(Label::Clear.flipped(), Label::Clouds);
        assert_eq!(Label::Clouds.flipped(), Label::Clear);
        assert_eq!(Label::Clear.index(), 0);
        assert_eq!(Label::Clouds.index(), 1);
    }
}
