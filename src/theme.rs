use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("failed to access theme file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label for the toggle control: it names the theme a press switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Remembers the selected theme in a one-line `theme=<name>` file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, or the default when nothing has been saved yet.
    pub fn load(&self) -> Result<Theme, ThemeError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "no saved theme");
                return Ok(Theme::default());
            }
            Err(source) => {
                return Err(ThemeError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let value = contents
            .lines()
            .filter_map(|line| line.split_once('='))
            .find(|(key, _)| key.trim() == THEME_KEY)
            .map(|(_, value)| value);

        match value {
            Some(value) => value.parse(),
            None => Ok(Theme::default()),
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        fs::write(&self.path, format!("{THEME_KEY}={theme}\n")).map_err(|source| ThemeError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = ?self.path, %theme, "theme saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{tempdir, TempDir};

    use super::*;

    fn scratch_store() -> (TempDir, ThemeStore) {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("theme"));
        (dir, store)
    }

    #[test]
    fn toggle_flips_between_themes() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Light\n".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!("sepia".parse::<Theme>(), Err(ThemeError::UnknownTheme(v)) if v == "sepia"));
    }

    #[test]
    fn missing_file_loads_dark() {
        let (_dir, store) = scratch_store();
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }

    #[test]
    fn save_then_load() {
        let (_dir, store) = scratch_store();
        store.save(Theme::Light).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "theme=light\n");
        assert_eq!(store.load().unwrap(), Theme::Light);

        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_is_an_error() {
        let (_dir, store) = scratch_store();
        fs::write(store.path(), "theme=neon\n").unwrap();
        assert!(matches!(store.load(), Err(ThemeError::UnknownTheme(_))));
    }

    #[test]
    fn file_without_theme_key_loads_default() {
        let (_dir, store) = scratch_store();
        fs::write(store.path(), "contrast=high\n").unwrap();
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }
}
