use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use exif::{In, Reader, Tag, Value};
use tracing::debug;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// --- Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    debug!(count = paths.len(), dir = %dir_path.display(), "found slides");
    Ok(paths)
}

/// EXIF orientation of a JPEG, 1 (upright) when missing or unreadable.
pub fn exif_orientation(bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("no EXIF data: {e}");
            return 1;
        }
    };

    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert!(is_supported_image(Path::new("a/B.JPG")));
        assert!(is_supported_image(Path::new("c.png")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("README")));
    }

    #[test]
    fn lists_images_sorted_by_name() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        for name in ["c.png", "a.jpg", "b.GIF", "skip.txt"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        fs::create_dir(dir.join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.GIF", "c.png"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        assert!(load_sorted_image_paths(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_sorted_image_paths(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn garbage_has_upright_orientation() {
        assert_eq!(exif_orientation(b"not an image"), 1);
    }
}
