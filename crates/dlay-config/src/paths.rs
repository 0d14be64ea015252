//! Platform-specific paths for user presets.
//!
//! - Linux: `~/.config/dlay/presets/`
//! - macOS: `~/Library/Application Support/dlay/presets/`
//! - Windows: `%APPDATA%\dlay\presets\`

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "dlay";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Preset file extension.
const PRESET_EXT: &str = "toml";

/// Returns the user-specific presets directory.
///
/// Falls back to `./dlay/presets` if the config directory cannot be
/// determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Ensure the user presets directory exists and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// Find a preset file by path or name.
///
/// `name` may be a path to an existing file, or a preset name (with or
/// without `.toml`) looked up in `dir`.
pub fn find_preset_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.{PRESET_EXT}")
    };
    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// Find a preset file by path or name in the user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

/// List all `.toml` files in a directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut presets: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == PRESET_EXT))
        .collect();
    presets.sort();
    presets
}

/// List all preset files in the user presets directory.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// Preset name from its file path (the file stem).
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn user_dir_ends_with_app_presets() {
        let dir = user_presets_dir();
        assert!(dir.ends_with("dlay/presets"), "{dir:?}");
    }

    #[test]
    fn lists_only_toml_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("b.toml"), "name = \"b\"").unwrap();
        std::fs::write(tmp.path().join("a.toml"), "name = \"a\"").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(tmp.path().join("sub.toml")).unwrap();

        let found = list_presets_in_dir(tmp.path());
        let names: Vec<_> = found
            .iter()
            .filter_map(|p| preset_name_from_path(p))
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn missing_dir_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(list_presets_in_dir(&tmp.path().join("nope")).is_empty());
    }

    #[test]
    fn find_by_name_or_path() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("echo.toml");
        std::fs::write(&file, "name = \"echo\"").unwrap();

        assert_eq!(find_preset_in("echo", tmp.path()), Some(file.clone()));
        assert_eq!(find_preset_in("echo.toml", tmp.path()), Some(file.clone()));
        let by_path = file.to_string_lossy().into_owned();
        assert_eq!(find_preset_in(&by_path, Path::new("/nonexistent")), Some(file));
        assert_eq!(find_preset_in("missing", tmp.path()), None);
    }
}
