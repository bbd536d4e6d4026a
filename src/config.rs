use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::{Deserialize, Serialize};

use crate::converter::{DEFAULT_DECIMAL_PLACES, FormatOptions};
use crate::error::AppError;
use crate::locale::{Locale, MAX_EXACT_FRACTION_DIGITS};

/// Persisted formatting defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        let contents = toml::to_string_pretty(self)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    /// Reject stored values the formatter cannot honour.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(places) = self.decimal_places
            && places > MAX_EXACT_FRACTION_DIGITS
        {
            return Err(AppError::config(format!(
                "decimal_places must be at most {MAX_EXACT_FRACTION_DIGITS} (got {places})"
            )));
        }
        if let Some(ref name) = self.locale {
            name.parse::<Locale>()?;
        }
        Ok(())
    }

    /// Resolve effective options: explicit overrides, then this file, then the
    /// environment locale, then built-in defaults.
    pub fn format_options(
        &self,
        decimal_places: Option<usize>,
        locale: Option<&str>,
    ) -> Result<FormatOptions, AppError> {
        let decimal_places =
            decimal_places.or(self.decimal_places).unwrap_or(DEFAULT_DECIMAL_PLACES);
        let locale = match locale.or(self.locale.as_deref()) {
            Some(name) => name.parse::<Locale>()?,
            None => Locale::from_env().unwrap_or_default(),
        };
        Ok(FormatOptions::new(decimal_places, locale))
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("sizeconv").join("config.toml"))
}

pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let defaults =
            Config { decimal_places: Some(DEFAULT_DECIMAL_PLACES), ..Config::default() };
        let contents = toml::to_string_pretty(&defaults)?;
        fs::write(&path, contents)?;
    }
    Ok(path)
}
