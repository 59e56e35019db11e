//! Folder and image discovery.
//!
//! Stage 1 of the report pipeline. Lists the immediate subfolders of the
//! image base folder and the image files inside each one:
//!
//! ```text
//! photos/                    # image_base_folder
//! ├── Kitchen/               # Folder group, page title "Kitchen"
//! │   ├── 01.jpg
//! │   ├── 02.png
//! │   └── notes.txt          # Ignored: not an image extension
//! ├── Roof/
//! │   ├── overview.jpg
//! │   └── archive/           # Ignored: only one level is scanned
//! └── Empty/                 # Still a group, with no images
//! ```
//!
//! Extensions are matched case-sensitively against `.jpg`, `.png` and
//! `.jpeg`. Folder and file listings are sorted by name so the output does
//! not depend on the platform's directory order.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image base folder is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A subfolder and the images found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup {
    /// Folder name, used as the page title.
    pub title: String,
    pub path: PathBuf,
    /// Full image paths in listing order.
    pub images: Vec<PathBuf>,
}

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".png", ".jpeg"];

/// Scan `root` into one [`FolderGroup`] per immediate subdirectory.
pub fn scan(root: &Path) -> Result<Vec<FolderGroup>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut groups = Vec::new();
    for folder in sorted_entries(root)?.into_iter().filter(|p| p.is_dir()) {
        let images = sorted_entries(&folder)?
            .into_iter()
            .filter(|p| is_image(p))
            .collect::<Vec<_>>();
        log::debug!("{}: {} images", folder.display(), images.len());

        groups.push(FolderGroup {
            title: file_name(&folder),
            path: folder,
            images,
        });
    }
    Ok(groups)
}

fn sorted_entries(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect::<Vec<_>>();
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let name = file_name(path);
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
