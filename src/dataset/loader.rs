/// Data directory scanning
///
/// Finds the `.jpg` images directly inside the data directory (no recursion)
/// and pairs each with the label read from its `.txt` sidecar.
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::label::{read_label, Label};
use crate::error::{Result, ReviewError};

/// Image file extensions accepted by the scan (compared lowercase)
const IMAGE_EXTENSIONS: [&str; 1] = ["jpg"];

/// One image with the classifier's predicted label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sample {
    pub image: PathBuf,
    pub label: Label,
}

/// What to do with an image whose sidecar is missing or empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidecarPolicy {
    /// Abort on the first bad sidecar
    #[default]
    Strict,
    /// Leave the image out and keep going
    Skip,
}

/// List the images directly inside `dir`, sorted by file name
pub fn scan_images(dir: &Path) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let is_image = entry
            .path()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));

        if is_image {
            images.push(entry.into_path());
        }
    }

    images
}

/// The sidecar path for an image: same stem, `.txt` extension
pub fn sidecar_path(image: &Path) -> PathBuf {
    image.with_extension("txt")
}

/// Scan `dir` and read every image's sidecar label
pub fn load_samples(dir: &Path, policy: SidecarPolicy) -> Result<Vec<Sample>> {
    let images = scan_images(dir);
    debug!(dir = %dir.display(), found = images.len(), "scanned data directory");

    let mut samples = Vec::with_capacity(images.len());
    let mut skipped = 0usize;

    for image in images {
        match read_label(&sidecar_path(&image)) {
            Ok(label) => samples.push(Sample { image, label }),
            Err(err) if err.is_sidecar_error() && policy == SidecarPolicy::Skip => {
                warn!(image = %image.display(), error = %err, "skipping image without a usable label");
                skipped += 1;
            }
            Err(err) => {
                warn!(image = %image.display(), "cannot read label for image");
                return Err(err);
            }
        }
    }

    if samples.is_empty() {
        return Err(ReviewError::EmptyDataset(dir.to_path_buf()));
    }

    let clear = samples.iter().filter(|s| s.label == Label::Clear).count();
    info!(
        images = samples.len(),
        clear,
        clouds = samples.len() - clear,
        skipped,
        "loaded predicted labels"
    );

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_pair(dir: &Path, stem: &str, label: Option<&str>) {
        fs::write(dir.join(format!("{stem}.jpg")), b"").unwrap();
        if let Some(text) = label {
            fs::write(dir.join(format!("{stem}.txt")), text).unwrap();
        }
    }

    #[test]
    fn test_scan_is_flat_and_sorted() {
        let dir = tempdir().unwrap();
        write_pair(dir.path(), "b", Some("clear"));
        write_pair(dir.path(), "a", Some("clouds"));
        fs::write(dir.path().join("notes.md"), "ignore").unwrap();
        fs::write(dir.path().join("UPPER.JPG"), b"").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.jpg"), b"").unwrap();

        let names: Vec<_> = scan_images(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["UPPER.JPG", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_load_pairs_labels() {
        let dir = tempdir().unwrap();
        write_pair(dir.path(), "one", Some("clear 0.80"));
        write_pair(dir.path(), "two", Some("clouds 0.70"));

        let samples = load_samples(dir.path(), SidecarPolicy::Strict).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].label, Label::Clear);
        assert_eq!(samples[1].label, Label::Clouds);
        assert!(samples[1].image.ends_with("two.jpg"));
    }

    #[test]
    fn test_strict_policy_fails_on_missing_sidecar() {
        let dir = tempdir().unwrap();
        write_pair(dir.path(), "good", Some("clear"));
        write_pair(dir.path(), "orphan", None);

        let err = load_samples(dir.path(), SidecarPolicy::Strict).unwrap_err();
        assert!(matches!(err, ReviewError::MissingSidecar(p) if p.ends_with("orphan.txt")));
    }

    #[test]
    fn test_skip_policy_leaves_bad_images_out() {
        let dir = tempdir().unwrap();
        write_pair(dir.path(), "good", Some("clear"));
        write_pair(dir.path(), "orphan", None);
        write_pair(dir.path(), "blank", Some("\n"));

        let samples = load_samples(dir.path(), SidecarPolicy::Skip).unwrap();
        assert_eq!(samples.len(), 1);
        assert!(samples[0].image.ends_with("good.jpg"));
    }

    #[test]
    fn test_skip_policy_skips_undecodable_sidecar() {
        let dir = tempdir().unwrap();
        write_pair(dir.path(), "good", Some("clear"));
        fs::write(dir.path().join("bad.jpg"), b"").unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let samples = load_samples(dir.path(), SidecarPolicy::Skip).unwrap();
        assert_eq!(samples.len(), 1);
        assert!(samples[0].image.ends_with("good.jpg"));

        let err = load_samples(dir.path(), SidecarPolicy::Strict).unwrap_err();
        assert!(matches!(err, ReviewError::EmptyLabelFile(p) if p.ends_with("bad.txt")));
    }

    #[test]
    fn test_empty_directory_is_error() {
        let dir = tempdir().unwrap();
        let err = load_samples(dir.path(), SidecarPolicy::Strict).unwrap_err();
        assert!(matches!(err, ReviewError::EmptyDataset(_)));
    }
}
