use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted cell width or height.
pub const MAX_CELL_DIMENSION: u16 = 99;

/// Cells per grid side.
const GRID_CELLS: u16 = 3;

/// Top-level settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Cell box size and where the grid's top-left corner sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Columns per cell box, borders included.
    pub cell_width: u16,
    /// Rows per cell box, borders included.
    pub cell_height: u16,
    pub origin_row: u16,
    pub origin_col: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: 9,
            cell_height: 5,
            origin_row: 9,
            origin_col: 8,
        }
    }
}

impl Settings {
    /// Parse and validate settings TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let settings: Self = toml::from_str(input).context("failed to parse settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings at {}", path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid settings at {}", path.display()))
    }

    /// Load settings from [`config_path`], falling back to defaults when no
    /// file exists there.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_cell_dimension("layout.cell_width", self.layout.cell_width)?;
        validate_cell_dimension("layout.cell_height", self.layout.cell_height)?;
        validate_grid_extent(
            "layout.origin_row",
            self.layout.origin_row,
            self.layout.cell_height,
        )?;
        validate_grid_extent(
            "layout.origin_col",
            self.layout.origin_col,
            self.layout.cell_width,
        )?;
        Ok(())
    }
}

/// Return the settings file path.
///
/// Precedence: `TICTAC_CONFIG` env var > `<config dir>/tictac/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TICTAC_CONFIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("tictac").join("config.toml"))
}

// The mark is centred with equal padding on both sides, so both dimensions
// must be odd and leave room for the border.
fn validate_cell_dimension(field: &str, value: u16) -> Result<()> {
    if value < 3 {
        bail!("{field} must be at least 3, got {value}")
    }
    if value > MAX_CELL_DIMENSION {
        bail!("{field} must be at most {MAX_CELL_DIMENSION}, got {value}")
    }
    if value % 2 == 0 {
        bail!("{field} must be odd, got {value}")
    }
    Ok(())
}

// The far edge of the grid must still be addressable as a screen coordinate.
fn validate_grid_extent(field: &str, origin: u16, cell_size: u16) -> Result<()> {
    let extent = cell_size
        .checked_mul(GRID_CELLS)
        .and_then(|span| origin.checked_add(span));
    if extent.is_none() {
        bail!("{field} = {origin} puts the grid past the last screen coordinate")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_match_classic_layout() {
        let settings = Settings::default();
        assert_eq!(settings.layout.cell_width, 9);
        assert_eq!(settings.layout.cell_height, 5);
        assert_eq!(settings.layout.origin_row, 9);
        assert_eq!(settings.layout.origin_col, 8);
        settings.validate().unwrap();
    }

    #[test]
    fn empty_input_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_layout_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
[layout]
cell_width = 7
origin_col = 2
"#,
        )
        .unwrap();
        assert_eq!(settings.layout.cell_width, 7);
        assert_eq!(settings.layout.origin_col, 2);
        assert_eq!(settings.layout.cell_height, 5);
        assert_eq!(settings.layout.origin_row, 9);
    }

    #[test]
    fn rejects_even_width() {
        let err = Settings::from_toml_str("[layout]\ncell_width = 8\n").unwrap_err();
        assert!(err.to_string().contains("layout.cell_width must be odd"));
    }

    #[test]
    fn rejects_too_small_height() {
        let err = Settings::from_toml_str("[layout]\ncell_height = 1\n").unwrap_err();
        assert!(err.to_string().contains("layout.cell_height must be at least 3"));
    }

    #[test]
    fn rejects_oversized_layout() {
        let err = Settings::from_toml_str("[layout]\ncell_height = 32767\n").unwrap_err();
        assert!(err.to_string().contains("layout.cell_height must be at most 99"));

        let err = Settings::from_toml_str("[layout]\ncell_width = 101\n").unwrap_err();
        assert!(err.to_string().contains("layout.cell_width must be at most 99"));

        let max = format!("[layout]\ncell_width = {MAX_CELL_DIMENSION}\n");
        Settings::from_toml_str(&max).unwrap();
    }

    #[test]
    fn rejects_origin_that_pushes_grid_off_screen() {
        let err = Settings::from_toml_str("[layout]\norigin_row = 65535\n").unwrap_err();
        assert!(err.to_string().contains("layout.origin_row"));

        let err = Settings::from_toml_str("[layout]\norigin_col = 65530\n").unwrap_err();
        assert!(err.to_string().contains("layout.origin_col"));

        // 65535 - 3 * 5 is the last row the default grid can start on.
        Settings::from_toml_str("[layout]\norigin_row = 65520\n").unwrap();
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = Settings::from_toml_str("[layout]\nboard_size = 4\n").unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"));

        assert!(Settings::from_toml_str("[theme]\ncolor = \"red\"\n").is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = std::env::temp_dir().join("tictac-config-test-read");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("config.toml");
        fs::write(&path, "[layout]\norigin_row = 3\n").unwrap();

        let settings = Settings::from_path(&path).unwrap();
        assert_eq!(settings.layout.origin_row, 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Settings::from_path(Path::new("/nonexistent/tictac/config.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read settings"));
    }

    #[test]
    fn load_uses_env_path_and_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var_os("TICTAC_CONFIG");

        let dir = std::env::temp_dir().join("tictac-config-test-load");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("config.toml");
        fs::write(&path, "[layout]\ncell_height = 7\n").unwrap();

        unsafe { std::env::set_var("TICTAC_CONFIG", &path) };
        assert_eq!(config_path(), Some(path.clone()));
        assert_eq!(Settings::load().unwrap().layout.cell_height, 7);

        unsafe { std::env::set_var("TICTAC_CONFIG", dir.join("missing.toml")) };
        assert_eq!(Settings::load().unwrap(), Settings::default());

        match original {
            Some(v) => unsafe { std::env::set_var("TICTAC_CONFIG", v) },
            None => unsafe { std::env::remove_var("TICTAC_CONFIG") },
        }
        let _ = fs::remove_dir_all(&dir);
    }
}
