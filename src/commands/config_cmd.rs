use std::path::Path;
use std::process::Command;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::locale::Locale;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub set_decimal_places: Option<usize>,
    pub set_locale: Option<String>,
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    if options.show_path {
        let path = config_file_path()?;
        println!("Configuration file: {}", path.display());
    }

    if options.set_decimal_places.is_some() || options.set_locale.is_some() {
        let mut config = Config::load()?;
        if let Some(places) = options.set_decimal_places {
            config.decimal_places = Some(places);
            println!("Default decimal places set to {places}.");
        }
        if let Some(ref name) = options.set_locale {
            let locale: Locale = name.parse()?;
            config.locale = Some(locale.name().to_string());
            println!("Default locale set to '{locale}'.");
        }
        config.save()?;
        tracing::debug!(?config, "saved configuration");
    }

    if options.edit {
        let path = ensure_config_file()?;
        open_editor(&path)?;
    }

    if !options.show_path
        && options.set_decimal_places.is_none()
        && options.set_locale.is_none()
        && !options.edit
    {
        let path = config_file_path()?;
        println!("Configuration file: {}", path.display());
    }

    Ok(())
}

fn open_editor(path: &Path) -> Result<(), AppError> {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "nano".to_string());
    tracing::debug!(%editor, path = %path.display(), "launching editor");

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(err.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Editor(format!("Editor exited with status {}", status)))
    }
}
