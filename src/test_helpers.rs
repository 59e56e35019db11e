//! Shared test utilities for the weekly-grid test suite.
//!
//! Provides a fixture tree with real (tiny) images, config and group
//! builders, and lookup helpers that panic with a useful message on a miss.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let groups = scan(tmp.path()).unwrap();
//!
//! let kitchen = find_group(&groups, "Kitchen");
//! assert_eq!(image_names(kitchen), vec!["01.jpg", "02.png", "03.jpeg"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::ReportConfig;
use crate::scan::FolderGroup;

// =========================================================================
// Fixture setup
// =========================================================================

/// Build the standard fixture tree in a temp directory and return it.
///
/// ```text
/// Empty/
/// Kitchen/01.jpg 02.png 03.jpeg notes.txt
/// Roof/overview.jpg archive/old.jpg
/// ```
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("Empty")).unwrap();

    let kitchen = root.join("Kitchen");
    fs::create_dir_all(&kitchen).unwrap();
    write_jpeg(&kitchen.join("01.jpg"), 12, 8);
    write_png(&kitchen.join("02.png"), 8, 12);
    write_jpeg(&kitchen.join("03.jpeg"), 10, 10);
    fs::write(kitchen.join("notes.txt"), "not an image").unwrap();

    let roof = root.join("Roof");
    fs::create_dir_all(roof.join("archive")).unwrap();
    write_jpeg(&roof.join("overview.jpg"), 16, 9);
    write_jpeg(&roof.join("archive").join("old.jpg"), 4, 4);

    tmp
}

/// Write a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a solid-colour JPEG of the given size.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_pixel(width, height, image::Rgb([40, 120, 200]))
        .save_with_format(path, image::ImageFormat::Jpeg)
        .unwrap();
}

// =========================================================================
// Builders
// =========================================================================

/// A valid config: 7.5in × 9in grid area, 0.1in spacing, 0.5in margin.
pub fn sample_config(images_per_row: u32, images_per_column: u32) -> ReportConfig {
    ReportConfig {
        image_base_folder: PathBuf::from("photos"),
        output_file: PathBuf::from("weekly.docx"),
        images_per_row,
        images_per_column,
        image_spacing: 0.1,
        page_height: 9.0,
        page_width: 7.5,
        page_border_width: 0.5,
    }
}

/// A group of `count` image paths that do not exist on disk.
pub fn group(title: &str, count: usize) -> FolderGroup {
    let path = PathBuf::from("/nonexistent").join(title);
    FolderGroup {
        title: title.to_string(),
        images: (0..count).map(|i| path.join(format!("{i:03}.jpg"))).collect(),
        path,
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a group by title. Panics if not found.
pub fn find_group<'a>(groups: &'a [FolderGroup], title: &str) -> &'a FolderGroup {
    groups.iter().find(|g| g.title == title).unwrap_or_else(|| {
        let titles = group_titles(groups);
        panic!("group '{title}' not found. Available: {titles:?}")
    })
}

/// All group titles in scan order.
pub fn group_titles(groups: &[FolderGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.title.as_str()).collect()
}

/// File names of a group's images, in order.
pub fn image_names(group: &FolderGroup) -> Vec<String> {
    group
        .images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}
