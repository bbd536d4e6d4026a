pub mod best;
pub mod config_cmd;
pub mod convert;
pub mod format;

pub use best::execute_best;
pub use config_cmd::execute_config;
pub use convert::execute_convert;
pub use format::execute_format;

use crate::config::Config;
use crate::converter::FormatOptions;
use crate::error::AppError;

/// Formatting flags shared by the printing commands.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    pub decimal_places: Option<usize>,
    pub locale: Option<String>,
}

impl DisplayOptions {
    pub(crate) fn resolve(&self) -> Result<FormatOptions, AppError> {
        let config = Config::load()?;
        let options = config.format_options(self.decimal_places, self.locale.as_deref())?;
        tracing::debug!(
            decimal_places = options.decimal_places,
            locale = %options.locale,
            "resolved format options"
        );
        Ok(options)
    }
}
