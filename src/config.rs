//! Report configuration module.
//!
//! Handles loading and validating the flat settings file that drives a run.
//! Every key is required: the grid dimensions feed straight into the cell
//! size arithmetic, so there is no sensible default to fall back on.
//!
//! ## Config File
//!
//! TOML is the native format. A `.json` file with the same eight keys is
//! accepted too, so existing `config.json` files keep working:
//!
//! ```toml
//! image_base_folder = "photos"    # One subfolder per report section
//! output_file = "weekly.docx"     # Overwritten on every run
//! images_per_row = 3              # Grid columns
//! images_per_column = 2           # Grid rows
//! image_spacing = 0.1             # Inches between neighbouring cells
//! page_height = 9.0               # Inches available for the grid
//! page_width = 7.5                # Inches available for the grid
//! page_border_width = 0.5         # Page margin in inches
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one report run.
///
/// Lengths (`image_spacing`, `page_*`) are in inches. The struct is loaded
/// once and passed by reference to every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory whose immediate subfolders become report sections.
    pub image_base_folder: PathBuf,
    /// Path of the `.docx` file to write.
    pub output_file: PathBuf,
    /// Number of grid columns.
    pub images_per_row: u32,
    /// Number of grid rows.
    pub images_per_column: u32,
    /// Gap between neighbouring cells.
    pub image_spacing: f64,
    /// Height available for the grid.
    pub page_height: f64,
    /// Width available for the grid.
    pub page_width: f64,
    /// Page margin on all four sides; also subtracted from the grid height.
    pub page_border_width: f64,
}

impl ReportConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_per_row == 0 {
            return Err(ConfigError::Validation(
                "images_per_row must be at least 1".into(),
            ));
        }
        if self.images_per_column == 0 {
            return Err(ConfigError::Validation(
                "images_per_column must be at least 1".into(),
            ));
        }
        check_length("image_spacing", self.image_spacing, true)?;
        check_length("page_height", self.page_height, false)?;
        check_length("page_width", self.page_width, false)?;
        check_length("page_border_width", self.page_border_width, true)?;

        let (cell_width, cell_height) = self.cell_size();
        if cell_width <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "page_width {} leaves no room for {} columns spaced {} apart",
                self.page_width, self.images_per_row, self.image_spacing
            )));
        }
        if cell_height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "page_height {} leaves no room for {} rows spaced {} apart",
                self.page_height, self.images_per_column, self.image_spacing
            )));
        }
        Ok(())
    }

    /// Cell `(width, height)` in inches.
    ///
    /// Only meaningful once row and column counts are known to be non-zero.
    pub(crate) fn cell_size(&self) -> (f64, f64) {
        let columns = f64::from(self.images_per_row);
        let rows = f64::from(self.images_per_column);
        let width = (self.page_width - self.image_spacing * (columns - 1.0)) / columns;
        let height = (self.page_height
            - self.page_border_width
            - self.image_spacing * (rows - 1.0))
            / rows;
        (width, height)
    }
}

fn check_length(key: &str, value: f64, allow_zero: bool) -> Result<(), ConfigError> {
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && in_range {
        Ok(())
    } else if allow_zero {
        Err(ConfigError::Validation(format!(
            "{key} must be a non-negative number, got {value}"
        )))
    } else {
        Err(ConfigError::Validation(format!(
            "{key} must be a positive number, got {value}"
        )))
    }
}

/// Parse config text, picking the format from the file extension.
///
/// `.json` is parsed as JSON; anything else as TOML.
pub fn parse_config(content: &str, path: &Path) -> Result<ReportConfig, ConfigError> {
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let config: ReportConfig = if is_json {
        serde_json::from_str(content)?
    } else {
        toml::from_str(content)?
    };
    config.validate()?;
    Ok(config)
}

/// Load, parse and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<ReportConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Returns a fully-commented sample `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Weekly Grid Configuration
# =========================
# Every key is required. Lengths are in inches.

# Directory whose immediate subfolders become report sections.
# Each subfolder name is used as the page title.
image_base_folder = "photos"

# The .docx file to write. An existing file is overwritten.
output_file = "weekly.docx"

# ---------------------------------------------------------------------------
# Grid
# ---------------------------------------------------------------------------
# Columns per page.
images_per_row = 3

# Rows per page.
images_per_column = 2

# Gap between neighbouring cells.
image_spacing = 0.1

# ---------------------------------------------------------------------------
# Page geometry
# ---------------------------------------------------------------------------
# Height and width available for the image grid.
page_height = 9.0
page_width = 7.5

# Margin on all four sides of the page. Also subtracted from page_height
# to leave room for the header row.
page_border_width = 0.5
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_config;
    use tempfile::TempDir;

    const FULL_TOML: &str = r#"
image_base_folder = "photos"
output_file = "out.docx"
images_per_row = 3
images_per_column = 2
image_spacing = 0.1
page_height = 9.0
page_width = 7.5
page_border_width = 0.5
"#;

    #[test]
    fn parse_full_toml() {
        let config = parse_config(FULL_TOML, Path::new("config.toml")).unwrap();
        assert_eq!(config.image_base_folder, PathBuf::from("photos"));
        assert_eq!(config.output_file, PathBuf::from("out.docx"));
        assert_eq!(config.images_per_row, 3);
        assert_eq!(config.images_per_column, 2);
    }

    #[test]
    fn parse_json_by_extension() {
        let json = r#"{
            "image_base_folder": "photos",
            "output_file": "out.docx",
            "images_per_row": 4,
            "images_per_column": 3,
            "image_spacing": 0,
            "page_height": 10,
            "page_width": 7,
            "page_border_width": 0.5
        }"#;
        let config = parse_config(json, Path::new("config.json")).unwrap();
        assert_eq!(config.images_per_row, 4);
        assert_eq!(config.page_height, 10.0);
        assert_eq!(config.image_spacing, 0.0);
    }

    #[test]
    fn missing_key_is_error() {
        let toml = FULL_TOML.replace("images_per_row = 3\n", "");
        let result = parse_config(&toml, Path::new("config.toml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("images_per_row"));
    }

    #[test]
    fn missing_key_in_json_is_error() {
        let json = r#"{ "image_base_folder": "photos" }"#;
        let result = parse_config(json, Path::new("config.json"));
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let toml = format!("{FULL_TOML}image_spacin = 0.2\n");
        let err = parse_config(&toml, Path::new("config.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn malformed_toml_is_error() {
        let result = parse_config("this is not valid toml [[[", Path::new("config.toml"));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn negative_row_count_rejected_by_parser() {
        let toml = FULL_TOML.replace("images_per_row = 3", "images_per_row = -1");
        assert!(parse_config(&toml, Path::new("config.toml")).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_sample_config_passes() {
        assert!(sample_config(3, 2).validate().is_ok());
    }

    #[test]
    fn validate_zero_columns() {
        let err = sample_config(0, 2).validate().unwrap_err();
        assert!(err.to_string().contains("images_per_row"));
    }

    #[test]
    fn validate_zero_rows() {
        let err = sample_config(3, 0).validate().unwrap_err();
        assert!(err.to_string().contains("images_per_column"));
    }

    #[test]
    fn validate_negative_spacing() {
        let mut config = sample_config(3, 2);
        config.image_spacing = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("image_spacing"));
    }

    #[test]
    fn validate_zero_spacing_and_margin_ok() {
        let mut config = sample_config(3, 2);
        config.image_spacing = 0.0;
        config.page_border_width = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_page_dimensions_must_be_positive() {
        let mut config = sample_config(3, 2);
        config.page_height = 0.0;
        assert!(config.validate().is_err());

        let mut config = sample_config(3, 2);
        config.page_width = -7.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_nan_rejected() {
        let mut config = sample_config(3, 2);
        config.page_width = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_spacing_wider_than_page() {
        let mut config = sample_config(3, 2);
        config.image_spacing = 5.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_width"));
    }

    #[test]
    fn cell_size_matches_formula() {
        let config = sample_config(3, 2);
        let (width, height) = config.cell_size();
        assert!((width - (7.5 - 0.1 * 2.0) / 3.0).abs() < 1e-9);
        assert!((height - (9.0 - 0.5 - 0.1) / 2.0).abs() < 1e-9);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, FULL_TOML).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.page_width, 7.5);
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            FULL_TOML.replace("images_per_column = 2", "images_per_column = 0"),
        )
        .unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid() {
        let config = parse_config(stock_config_toml(), Path::new("config.toml"))
            .expect("stock config must parse and validate");
        assert_eq!(config.images_per_row, 3);
        assert_eq!(config.images_per_column, 2);
    }

    #[test]
    fn stock_config_toml_has_every_key() {
        let content = stock_config_toml();
        for key in [
            "image_base_folder",
            "output_file",
            "images_per_row",
            "images_per_column",
            "image_spacing",
            "page_height",
            "page_width",
            "page_border_width",
        ] {
            assert!(content.contains(key), "missing {key}");
        }
    }
}
