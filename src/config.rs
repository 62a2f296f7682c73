//! Runtime settings
//!
//! Values come from, in order of precedence: command-line flags (which also
//! read `SPELL_*` environment variables), `config.toml` in the data
//! directory, then built-in defaults.

use crate::catalog::CatalogSource;
use serde::Deserialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Contents of `config.toml`
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub name: Option<String>,
    pub catalog: Option<String>,
}

impl FileConfig {
    /// Read `config.toml` from `dir`
    ///
    /// A missing file is not an error; an unreadable or malformed one is
    /// logged and ignored.
    #[must_use]
    pub fn load(dir: &Path) -> Option<Self> {
        let path = dir.join("config.toml");
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub name: Option<String>,
    pub data_dir: PathBuf,
    pub catalog: CatalogSource,
}

impl Settings {
    /// Merge command-line values over the config file and defaults
    #[must_use]
    pub fn resolve(
        name: Option<String>,
        data_dir: Option<PathBuf>,
        catalog: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let file = FileConfig::load(&data_dir).unwrap_or_default();

        let name = name
            .or(file.name)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let catalog = catalog
            .or(file.catalog)
            .map_or(CatalogSource::Embedded, |value| CatalogSource::parse(&value));

        tracing::debug!(data_dir = %data_dir.display(), ?catalog, "resolved settings");

        Self {
            name,
            data_dir,
            catalog,
        }
    }

    /// The player's name, asking on stdin if none was configured
    ///
    /// # Errors
    ///
    /// Returns an I/O error if stdin closes before a name is entered.
    pub fn player_name(&mut self) -> io::Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }
        let name = prompt_for_name(io::stdin().lock(), io::stdout())?;
        self.name = Some(name.clone());
        Ok(name)
    }
}

/// Platform data directory, or `.spelltogether` in the working directory
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(".spelltogether"),
        |dir| dir.join("spelltogether"),
    )
}

/// Ask for a name until a non-empty one is given
///
/// # Errors
///
/// Returns `UnexpectedEof` if input ends first.
pub fn prompt_for_name<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    loop {
        write!(output, "what's your name? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no name entered",
            ));
        }
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}
